use std::sync::Arc;

use imaging::decoder::RasterImageDecoder;
use logger::TracingLogger;
use network::client::ReqwestHttpClient;

use business::application::product::fetch_detail::FetchProductDetailUseCaseImpl;
use business::application::product::fetch_image::FetchProductImageUseCaseImpl;
use business::application::screen::load::LoadProductScreenUseCaseImpl;
use business::domain::screen::use_cases::load::LoadProductScreenUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub load_screen: Arc<dyn LoadProductScreenUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let http_client = Arc::new(ReqwestHttpClient::new(config.http.timeout));
        let image_decoder = Arc::new(RasterImageDecoder);

        // Product use cases
        let fetch_detail_use_case = Arc::new(FetchProductDetailUseCaseImpl {
            http: http_client.clone(),
            logger: logger.clone(),
        });
        let fetch_image_use_case = Arc::new(FetchProductImageUseCaseImpl {
            http: http_client,
            decoder: image_decoder,
            logger: logger.clone(),
        });

        // Screen use cases
        let load_screen = Arc::new(LoadProductScreenUseCaseImpl {
            detail_fetcher: fetch_detail_use_case,
            image_fetcher: fetch_image_use_case,
            logger,
        });

        Self { load_screen }
    }
}
