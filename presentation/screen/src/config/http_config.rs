use std::env;
use std::time::Duration;

use anyhow::Context;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
}

impl HttpConfig {
    /// Load HTTP client configuration from environment variables
    ///
    /// Environment variables:
    /// - HTTP_TIMEOUT_SECS: per-request timeout in seconds (default: "60")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_value(env::var("HTTP_TIMEOUT_SECS").ok())
    }

    fn from_value(value: Option<String>) -> anyhow::Result<Self> {
        let timeout = match value {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {}", raw))?;
                Duration::from_secs(secs)
            }
            None => network::client::DEFAULT_TIMEOUT,
        };

        Ok(Self { timeout })
    }
}
