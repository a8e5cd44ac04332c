#![recursion_limit = "256"]

mod config;
mod routes;
mod state;
mod upstream;

use config::{ConfigError, ServerConfig};
use upstream::{UpstreamClient, UpstreamError};

/// Reasons the host fails to start.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    Leptos(String),

    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "activity board host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let upstream = UpstreamClient::new(&config.activities_api_url, config.upstream_timeout)?;
    tracing::debug!(base_url = upstream.base_url(), "activities service client ready");
    let state = state::AppState::new(upstream);

    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, upstream = %config.activities_api_url, "activity board listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
