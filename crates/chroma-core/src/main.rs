mod api;
mod config;
mod decode;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Could not find configuration file: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.system.log_level))
        .init();

    tracing::info!("ChromaCheck waking up...");
    api::run_api_server(config).await
}
