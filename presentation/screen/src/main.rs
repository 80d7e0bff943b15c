use dotenvy::dotenv;

mod config;
mod setup;
mod view;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, screen::Screen};

/// Product Screen Entry Point
///
/// Initializes logging and configuration, wires dependencies, and shows the
/// product detail screen until it is dismissed with Ctrl+C.
///
/// - config/: Application configuration (detail endpoint, HTTP client)
/// - setup/: Dependency injection and the screen runtime
/// - view/: Rendering and the result sink the screen reads from
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Show the screen
    Screen::run(config, container).await?;

    Ok(())
}
