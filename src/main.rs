mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{HostConfig, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, backend = %config.backend_url, "campus-books listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
