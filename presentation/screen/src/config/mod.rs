pub mod app_config;
pub mod detail_config;
pub mod http_config;
