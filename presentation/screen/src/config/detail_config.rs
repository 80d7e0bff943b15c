use std::env;

use anyhow::Context;
use url::Url;

/// Endpoint serving the one product this screen shows.
pub const DEFAULT_DETAIL_URL: &str =
    "https://honeststore.eu.pythonanywhere.com/api/get_detail?id=3";

/// Where the product detail is fetched from
#[derive(Debug, Clone)]
pub struct DetailConfig {
    pub endpoint: Url,
}

impl DetailConfig {
    /// Load detail configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_DETAIL_URL: absolute detail endpoint (default: the honeststore endpoint for id 3)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_value(env::var("PRODUCT_DETAIL_URL").ok())
    }

    fn from_value(value: Option<String>) -> anyhow::Result<Self> {
        let raw = value.unwrap_or_else(|| DEFAULT_DETAIL_URL.to_string());
        let endpoint = Url::parse(&raw)
            .with_context(|| format!("PRODUCT_DETAIL_URL is not a valid URL: {}", raw))?;

        Ok(Self { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_fixed_endpoint_when_variable_is_unset() {
        // Arrange & Act
        let config = DetailConfig::from_value(None).unwrap();

        // Assert
        assert_eq!(config.endpoint.as_str(), DEFAULT_DETAIL_URL);
        assert_eq!(config.endpoint.query(), Some("id=3"));
    }

    #[test]
    fn should_use_configured_endpoint() {
        // Arrange & Act
        let config =
            DetailConfig::from_value(Some("http://localhost:8000/api/get_detail?id=3".to_string()))
                .unwrap();

        // Assert
        assert_eq!(config.endpoint.host_str(), Some("localhost"));
        assert_eq!(config.endpoint.port(), Some(8000));
    }

    #[test]
    fn should_reject_relative_endpoint() {
        // Arrange & Act
        let result = DetailConfig::from_value(Some("/api/get_detail?id=3".to_string()));

        // Assert
        assert!(result.is_err());
    }
}
