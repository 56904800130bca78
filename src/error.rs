use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("response could not be parsed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("{0}")]
    InvalidInput(&'static str),
}

impl ClientError {
    pub fn status(status: StatusCode, body: &[u8]) -> Self {
        ClientError::Status {
            status,
            message: error_message(status, body),
        }
    }
}

/// Best-effort human message out of an error body.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_slice(body) {
        let pick = |key: &str| map.get(key).and_then(|v| v.as_str()).map(str::to_string);

        match (pick("error").or_else(|| pick("message")), pick("details")) {
            (Some(error), Some(details)) => return format!("{error} ({details})"),
            (Some(error), None) | (None, Some(error)) => return error,
            (None, None) => {}
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    if text.is_empty() {
        status.canonical_reason().unwrap_or("no reason").to_string()
    } else {
        text.to_string()
    }
}
