use async_trait::async_trait;
use url::Url;

use crate::domain::errors::FetchError;
use crate::domain::product::model::ProductDetail;

pub struct FetchProductDetailParams {
    pub endpoint: Url,
}

#[async_trait]
pub trait FetchProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: FetchProductDetailParams)
    -> Result<ProductDetail, FetchError>;
}
