mod account;
mod pix;

pub use account::{Balance, History, HistoryQuery};
pub use pix::{CreatePix, Created};

use reqwest::{Client, Url};

use crate::{client, error::ClientError};

/// Client for the local payment service.
pub struct ServiceClient {
    http: Client,
    base_url: Url,
}

impl ServiceClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    #[tracing::instrument(skip_all, fields(amount = %req.amount))]
    pub async fn create_pix(&self, req: &CreatePix) -> Result<Created, ClientError> {
        req.validate()?;

        let res = self.http.post(self.url("/api/createpix")?).json(req).send().await?;

        let (status, body) = client::read_json(res).await?;

        tracing::info!(%status, "pix_created");

        Ok(Created { status, body })
    }

    #[tracing::instrument(skip_all)]
    pub async fn balance(&self, email: &str) -> Result<Balance, ClientError> {
        let email = require_email(email)?;

        let res = self
            .http
            .post(self.url("/api/saldo")?)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;

        let (_, balance) = client::read_json(res).await?;

        Ok(balance)
    }

    #[tracing::instrument(skip_all)]
    pub async fn history(&self, query: &HistoryQuery) -> Result<History, ClientError> {
        require_email(&query.email)?;

        let res = self
            .http
            .get(self.url("/api/transacoes")?)
            .query(&query.params())
            .send()
            .await?;

        let (_, history) = client::read_json(res).await?;

        Ok(history)
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|_| ClientError::InvalidInput("service base url cannot be joined with a path"))
    }
}

fn require_email(email: &str) -> Result<&str, ClientError> {
    match email.trim() {
        "" => Err(ClientError::InvalidInput("email is required")),
        email => Ok(email),
    }
}
