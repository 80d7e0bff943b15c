use async_trait::async_trait;
use url::Url;

use super::model::ImageBuffer;
use crate::domain::errors::FetchError;

/// Raw result of a single GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status lies in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Service port for issuing plain HTTP GET requests.
///
/// Implementations report transport failures (timeouts included) as
/// [`FetchError::Network`] and return every HTTP status, 2xx or not, as a
/// response.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// Service port for decoding raster image bytes.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, FetchError>;
}
