use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::errors::FetchError;
use crate::domain::logger::Logger;
use crate::domain::product::model::ImageBuffer;
use crate::domain::product::services::{HttpClient, ImageDecoder};
use crate::domain::product::use_cases::fetch_image::{
    FetchProductImageParams, FetchProductImageUseCase,
};

pub struct FetchProductImageUseCaseImpl {
    pub http: Arc<dyn HttpClient>,
    pub decoder: Arc<dyn ImageDecoder>,
    pub logger: Arc<dyn Logger>,
}

impl FetchProductImageUseCaseImpl {
    /// Accepts only absolute `http`/`https` URLs.
    fn parse_image_url(raw: &str) -> Result<Url, FetchError> {
        Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or(FetchError::InvalidUrl)
    }
}

#[async_trait]
impl FetchProductImageUseCase for FetchProductImageUseCaseImpl {
    async fn execute(&self, params: FetchProductImageParams) -> Result<ImageBuffer, FetchError> {
        let url = Self::parse_image_url(&params.url)?;

        self.logger.info(&format!("Downloading product image {}", url));

        let response = self.http.get(&url).await?;

        if !response.is_success() {
            self.logger.warn(&format!(
                "Product image request answered with status {}",
                response.status
            ));
            return Err(FetchError::ImageDecode);
        }

        let image = self.decoder.decode(&response.body)?;

        self.logger.info(&format!(
            "Product image decoded: {}x{}",
            image.width(),
            image.height()
        ));

        Ok(image)
    }
}
