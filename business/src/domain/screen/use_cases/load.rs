use async_trait::async_trait;
use url::Url;

use crate::domain::screen::model::ScreenState;
use crate::domain::screen::sink::ScreenSink;

pub struct LoadProductScreenParams {
    pub endpoint: Url,
}

/// Runs once when the detail screen becomes visible.
///
/// Never fails: errors are logged and the returned state is whatever the
/// screen ends up showing.
#[async_trait]
pub trait LoadProductScreenUseCase: Send + Sync {
    async fn execute(&self, params: LoadProductScreenParams, sink: &dyn ScreenSink)
    -> ScreenState;
}
