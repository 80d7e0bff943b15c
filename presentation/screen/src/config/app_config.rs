use super::{detail_config::DetailConfig, http_config::HttpConfig};

pub struct AppConfig {
    pub detail: DetailConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            detail: DetailConfig::from_env()?,
            http: HttpConfig::from_env()?,
        })
    }
}
