use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

pub fn build(timeout: Duration) -> Result<Client, ClientError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("boltpix/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Fails on non-2xx, otherwise decodes the body as JSON.
#[tracing::instrument(skip_all)]
pub async fn read_json<T: DeserializeOwned>(res: Response) -> Result<(StatusCode, T), ClientError> {
    let status = res.status();

    tracing::debug!(?status, url = %res.url(), "res");

    let body = res.bytes().await?;

    if !status.is_success() {
        return Err(ClientError::status(status, &body));
    }

    Ok((status, serde_json::from_slice(&body)?))
}
