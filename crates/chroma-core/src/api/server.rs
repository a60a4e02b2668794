use super::routes::{analyze_color, get_config_handler, update_config_handler};
use super::state::AppState;
use super::ui::index_page;
use crate::config::Config;
use axum::routing::{get, post};
use std::net::SocketAddr;

pub async fn run_api_server(config: Config) -> anyhow::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let state = AppState::new(config);

    let app = axum::Router::new()
        .route("/", get(index_page))
        .route("/analyze_color", post(analyze_color))
        .route(
            "/config",
            get(get_config_handler).post(update_config_handler),
        )
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("ChromaCheck listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
