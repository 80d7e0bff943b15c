use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use business::domain::errors::FetchError;
use business::domain::product::services::{HttpClient, HttpResponse};

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared reqwest client issuing plain GET requests.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(target: "product_screen", %url, error = %e, "GET request failed");
            FetchError::Network
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(target: "product_screen", %url, error = %e, "reading response body failed");
            FetchError::Network
        })?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
