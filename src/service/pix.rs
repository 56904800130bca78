use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ClientError;

/// Body of `POST /api/createpix`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CreatePix {
    pub api: String,
    pub amount: Decimal,
    pub name: String,
    pub document: String,
}

impl CreatePix {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api.trim().is_empty() {
            return Err(ClientError::InvalidInput("api key is required"));
        }

        if self.amount <= Decimal::ZERO {
            return Err(ClientError::InvalidInput("amount must be positive"));
        }

        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidInput("name is required"));
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct Created {
    pub status: StatusCode,
    pub body: Value,
}

impl Created {
    pub fn charge(&self) -> Option<PixCharge> {
        serde_json::from_value(self.body.get("boltResponse")?.clone()).ok()
    }
}

/// Copy-and-paste code and QR image of a PIX charge.
#[derive(Debug, PartialEq, serde::Deserialize)]
pub struct PixCharge {
    pub code: String,
    pub base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn request() -> CreatePix {
        CreatePix {
            api: "user_api_key".into(),
            amount: dec!(49.90),
            name: "Maria Souza".into(),
            document: "12345678909".into(),
        }
    }

    #[test]
    fn amount_is_sent_as_a_number() {
        let body = serde_json::to_value(request()).expect("serializable");

        assert_eq!(
            body,
            json!({
                "api": "user_api_key",
                "amount": 49.9,
                "name": "Maria Souza",
                "document": "12345678909"
            })
        );
    }

    #[test]
    fn validation() {
        assert_ok!(request().validate());

        let blank_api = CreatePix { api: "  ".into(), ..request() };
        assert_matches!(blank_api.validate(), Err(ClientError::InvalidInput("api key is required")));

        let zero = CreatePix { amount: Decimal::ZERO, ..request() };
        assert_matches!(zero.validate(), Err(ClientError::InvalidInput("amount must be positive")));

        let no_name = CreatePix { name: String::new(), ..request() };
        assert_matches!(no_name.validate(), Err(ClientError::InvalidInput("name is required")));
    }

    #[test]
    fn charge_is_read_from_bolt_response() {
        let created = Created {
            status: StatusCode::OK,
            body: json!({
                "status": "ok",
                "boltResponse": { "code": "00020126...6304ABCD", "base64": "iVBORw0KGgo=" }
            }),
        };

        assert_eq!(
            created.charge(),
            Some(PixCharge {
                code: "00020126...6304ABCD".into(),
                base64: Some("iVBORw0KGgo=".into()),
            })
        );
    }

    #[test]
    fn charge_is_absent_on_other_bodies() {
        let created = Created {
            status: StatusCode::OK,
            body: json!({ "status": "ok" }),
        };

        assert_eq!(created.charge(), None);
    }
}
