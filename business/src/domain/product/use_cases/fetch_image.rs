use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::product::model::ImageBuffer;

/// `url` is taken verbatim from [`ProductDetail::image`] and validated by
/// the use case.
///
/// [`ProductDetail::image`]: crate::domain::product::model::ProductDetail::image
pub struct FetchProductImageParams {
    pub url: String,
}

#[async_trait]
pub trait FetchProductImageUseCase: Send + Sync {
    async fn execute(&self, params: FetchProductImageParams) -> Result<ImageBuffer, FetchError>;
}
