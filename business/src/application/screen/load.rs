use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::fetch_detail::{
    FetchProductDetailParams, FetchProductDetailUseCase,
};
use crate::domain::product::use_cases::fetch_image::{
    FetchProductImageParams, FetchProductImageUseCase,
};
use crate::domain::screen::model::ScreenState;
use crate::domain::screen::sink::ScreenSink;
use crate::domain::screen::use_cases::load::{LoadProductScreenParams, LoadProductScreenUseCase};

/// Fetches the detail, then its image, then publishes one combined state.
///
/// A failed detail fetch publishes nothing, so the screen keeps showing its
/// loading state. A failed image fetch only leaves the image slot empty.
pub struct LoadProductScreenUseCaseImpl {
    pub detail_fetcher: Arc<dyn FetchProductDetailUseCase>,
    pub image_fetcher: Arc<dyn FetchProductImageUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadProductScreenUseCase for LoadProductScreenUseCaseImpl {
    async fn execute(
        &self,
        params: LoadProductScreenParams,
        sink: &dyn ScreenSink,
    ) -> ScreenState {
        let detail = match self
            .detail_fetcher
            .execute(FetchProductDetailParams {
                endpoint: params.endpoint,
            })
            .await
        {
            Ok(detail) => detail,
            Err(e) => {
                self.logger
                    .error(&format!("Product detail fetch failed: {}", e));
                return ScreenState::Loading;
            }
        };

        let image = match self
            .image_fetcher
            .execute(FetchProductImageParams {
                url: detail.image.clone(),
            })
            .await
        {
            Ok(image) => Some(image),
            Err(e) => {
                self.logger.error(&format!(
                    "Product image fetch failed for '{}': {}",
                    detail.image, e
                ));
                None
            }
        };

        let state = ScreenState::Loaded { detail, image };

        if sink.is_live() {
            sink.publish(state.clone());
        } else {
            self.logger
                .debug("Screen dismissed before product detail arrived, dropping update");
        }

        state
    }
}
