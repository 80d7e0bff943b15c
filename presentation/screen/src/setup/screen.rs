use tokio::sync::watch;

use business::domain::screen::model::ScreenState;
use business::domain::screen::use_cases::load::LoadProductScreenParams;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::view::render::render;
use crate::view::sink::WatchScreenSink;

/// Terminal stand-in for the product detail screen.
///
/// The screen stays visible until Ctrl+C dismisses it, including when the
/// detail never arrives.
pub struct Screen;

impl Screen {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let (sink, mut receiver) = WatchScreenSink::channel();
        Self::draw(&receiver.borrow());

        // on_ready: the load runs on its own task and only reaches the
        // screen through the sink.
        let load_screen = container.load_screen.clone();
        let endpoint = config.detail.endpoint.clone();
        let load = tokio::spawn(async move {
            load_screen
                .execute(LoadProductScreenParams { endpoint }, &sink)
                .await
        });

        tokio::select! {
            _ = Self::follow(&mut receiver) => {
                tokio::signal::ctrl_c().await?;
            }
            result = tokio::signal::ctrl_c() => {
                result?;
            }
        }

        drop(receiver);
        println!("Screen dismissed");

        if !load.is_finished() {
            tracing::info!(target: "product_screen", "waiting for the outstanding product request");
        }
        let final_state = load.await?;
        tracing::debug!(target: "product_screen", loading = final_state.is_loading(), "product load finished");

        Ok(())
    }

    /// Redraws on every published state until the sink goes away.
    async fn follow(receiver: &mut watch::Receiver<ScreenState>) {
        while receiver.changed().await.is_ok() {
            Self::draw(&receiver.borrow_and_update());
        }
    }

    fn draw(state: &ScreenState) {
        for line in render(state) {
            println!("{}", line);
        }
    }
}
