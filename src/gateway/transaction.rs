use serde_json::Value;

/// Envelope of `GET /api/v1/transactions`.
#[derive(Debug, serde::Deserialize)]
pub struct Response {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum Lookup {
    Found(Value),
    NotFound(Option<String>),
}

impl From<Response> for Lookup {
    fn from(res: Response) -> Self {
        match res.success {
            true => Lookup::Found(res.data),
            false => Lookup::NotFound(res.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup(body: Value) -> Lookup {
        serde_json::from_value::<Response>(body)
            .expect("valid envelope")
            .into()
    }

    #[test]
    fn success_yields_data() {
        let data = json!({ "id": "tx_1", "status": "PAID", "amount": 25.9 });

        assert_eq!(
            lookup(json!({ "success": true, "data": data.clone() })),
            Lookup::Found(data)
        );
    }

    #[test]
    fn failure_yields_message() {
        assert_eq!(
            lookup(json!({ "success": false, "message": "Transaction not found" })),
            Lookup::NotFound(Some("Transaction not found".to_string()))
        );
    }

    #[test]
    fn missing_success_counts_as_failure() {
        assert_eq!(
            lookup(json!({ "data": { "id": "tx_1" } })),
            Lookup::NotFound(None)
        );
    }
}
