use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Answer of `POST /api/saldo`. Unknown users come back with a zero balance and a message.
#[derive(Debug, serde::Deserialize)]
pub struct Balance {
    #[serde(rename = "saldo", default, deserialize_with = "zero_if_null")]
    pub balance: Decimal,
    #[serde(default)]
    pub api: Value,
    #[serde(rename = "ativo")]
    pub active: Option<bool>,
    #[serde(rename = "tax")]
    pub fee: Option<Decimal>,
    pub message: Option<String>,
}

impl Balance {
    /// The service reports a missing key as `0`.
    pub fn api_key(&self) -> Option<&str> {
        self.api.as_str().filter(|key| !key.is_empty())
    }
}

fn zero_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pub email: String,
    pub status: Option<String>,
    pub method: Option<String>,
    pub limit: u32,
}

impl HistoryQuery {
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("email", self.email.trim().to_string())];

        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }

        if let Some(method) = &self.method {
            params.push(("pagamento", method.clone()));
        }

        params.push(("limit", self.limit.to_string()));

        params
    }
}

/// Answer of `GET /api/transacoes`.
#[derive(Debug, serde::Deserialize)]
pub struct History {
    #[serde(rename = "transacoes", default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, serde::Deserialize)]
pub struct Transaction {
    #[serde(rename = "data")]
    pub date: Option<String>,
    #[serde(rename = "cliente")]
    pub customer: Option<String>,
    #[serde(rename = "pagamento")]
    pub method: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Option<Decimal>,
    pub status: Option<String>,
    #[serde(rename = "pedido")]
    pub order: Option<String>,
    pub code: Option<String>,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

        write!(
            f,
            "{}  {}  {}  {}  {}  {}  {}",
            or_dash(&self.date),
            or_dash(&self.order),
            or_dash(&self.customer),
            or_dash(&self.method),
            self.amount.map_or_else(|| "-".to_string(), |a| a.to_string()),
            or_dash(&self.status),
            or_dash(&self.code),
        )
    }
}
