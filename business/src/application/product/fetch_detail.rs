use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::logger::Logger;
use crate::domain::product::model::ProductDetail;
use crate::domain::product::payload::parse_detail_body;
use crate::domain::product::services::HttpClient;
use crate::domain::product::use_cases::fetch_detail::{
    FetchProductDetailParams, FetchProductDetailUseCase,
};

pub struct FetchProductDetailUseCaseImpl {
    pub http: Arc<dyn HttpClient>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchProductDetailUseCase for FetchProductDetailUseCaseImpl {
    async fn execute(
        &self,
        params: FetchProductDetailParams,
    ) -> Result<ProductDetail, FetchError> {
        self.logger
            .info(&format!("Fetching product detail from {}", params.endpoint));

        let response = self.http.get(&params.endpoint).await?;

        if !response.is_success() {
            self.logger.warn(&format!(
                "Product detail endpoint answered with status {}",
                response.status
            ));
        }
        self.logger.debug(&format!(
            "Product detail body: {}",
            String::from_utf8_lossy(&response.body)
        ));

        let detail = parse_detail_body(&response.body)?;

        self.logger.info(&format!(
            "Product detail decoded: id {}, name {}, amount {}",
            detail.id, detail.name, detail.amount
        ));

        Ok(detail)
    }
}
