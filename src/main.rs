mod config;
mod routes;

use std::net::SocketAddr;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

async fn run() -> Result<(), HostError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app().map_err(HostError::Router)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "habithive console listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}

#[tokio::main]
async fn main() {
    // Missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "habithive host stopped");
        std::process::exit(1);
    }
}
