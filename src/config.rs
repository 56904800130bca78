use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use secrecy::SecretString;

macro_rules! get_var {
    ($name:expr) => {
        std::env::var($name).context(concat!("Environment variable not set: ", $name))
    };
}

pub const DEFAULT_GATEWAY_URL: &str = "https://boltpagamentos.com.br";
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_url: Url,
    pub service_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gateway_url = parse_url("BOLT_BASE_URL", opt_var("BOLT_BASE_URL"), DEFAULT_GATEWAY_URL)?;
        let service_url =
            parse_url("PIX_SERVICE_URL", opt_var("PIX_SERVICE_URL"), DEFAULT_SERVICE_URL)?;

        let timeout = parse_timeout(opt_var("HTTP_TIMEOUT_SECS"))?;

        Ok(Self {
            gateway_url,
            service_url,
            timeout,
        })
    }
}

/// Gateway key pair. Only the transaction lookup needs it.
pub struct Credentials {
    pub public_key: SecretString,
    pub secret_key: SecretString,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: SecretString::from(public_key.into()),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    pub fn from_env() -> Result<Self> {
        let public_key = get_var!("BOLT_PUBLIC_KEY")?;
        let secret_key = get_var!("BOLT_SECRET_KEY")?;

        Ok(Self::new(public_key, secret_key))
    }
}

pub fn parse_url(name: &str, value: Option<String>, default: &str) -> Result<Url> {
    let raw = value.as_deref().unwrap_or(default);

    Url::parse(raw).with_context(|| format!("{name} is not a valid URL: {raw}"))
}

/// Seconds, at least one.
pub fn parse_timeout(value: Option<String>) -> Result<Duration> {
    let secs = match value {
        Some(secs) => secs
            .trim()
            .parse()
            .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {secs}"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    if secs == 0 {
        anyhow::bail!("HTTP_TIMEOUT_SECS must be at least 1 second");
    }

    Ok(Duration::from_secs(secs))
}

fn opt_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn falls_back_to_default_url() {
        let url = assert_ok!(parse_url("BOLT_BASE_URL", None, DEFAULT_GATEWAY_URL));

        assert_eq!(url.host_str(), Some("boltpagamentos.com.br"));
    }

    #[test]
    fn rejects_invalid_url_naming_the_variable() {
        let err = assert_err!(parse_url(
            "PIX_SERVICE_URL",
            Some("not a url".to_string()),
            DEFAULT_SERVICE_URL
        ));

        assert!(err.to_string().contains("PIX_SERVICE_URL"));
    }

    #[test]
    fn timeout_defaults_and_parses() {
        assert_eq!(
            assert_ok!(parse_timeout(None)),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(
            assert_ok!(parse_timeout(Some(" 7 ".to_string()))),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn timeout_rejects_garbage_and_zero() {
        let err = assert_err!(parse_timeout(Some("abc".to_string())));
        assert!(err.to_string().contains("HTTP_TIMEOUT_SECS"));

        let err = assert_err!(parse_timeout(Some("0".to_string())));
        assert!(err.to_string().contains("at least 1 second"));
    }
}
