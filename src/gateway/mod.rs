mod transaction;

pub use transaction::Lookup;

use reqwest::{Client, RequestBuilder, Url, header};
use secrecy::ExposeSecret;

use crate::{client, config::Credentials, error::ClientError};

const TRANSACTIONS_PATH: &str = "/api/v1/transactions";

/// Authenticated client for the BoltPagamentos gateway.
pub struct GatewayClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl GatewayClient {
    pub fn new(http: Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn transaction(&self, external_id: &str) -> Result<Lookup, ClientError> {
        let external_id = external_id.trim();

        if external_id.is_empty() {
            return Err(ClientError::InvalidInput("external id is empty"));
        }

        let req = self
            .get(TRANSACTIONS_PATH)?
            .query(&[("externalId", external_id)]);

        let (_, res) = client::read_json::<transaction::Response>(req.send().await?).await?;

        tracing::debug!(success = res.success, "gateway_lookup");

        Ok(res.into())
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.base_url.join(path).map_err(|_| {
            ClientError::InvalidInput("gateway base url cannot be joined with a path")
        })?;

        let mut public_key = header::HeaderValue::from_str(self.credentials.public_key.expose_secret())?;
        let mut secret_key = header::HeaderValue::from_str(self.credentials.secret_key.expose_secret())?;
        public_key.set_sensitive(true);
        secret_key.set_sensitive(true);

        Ok(self
            .http
            .get(url)
            .header("x-public-key", public_key)
            .header("x-secret-key", secret_key)
            .header(header::CONTENT_TYPE, "application/json"))
    }
}
