mod config;
mod error;
mod page;
mod routes;
mod state;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let state = state::AppState::from_config(&config)?;
    if let Some(url) = config.backend_url.as_deref() {
        tracing::info!(upstream = url, "chat relay configured");
    }
    if let Some(warning) = config.relay_warning() {
        tracing::warn!("{warning}");
    }

    let app = routes::app(state, &config.site_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "chat host listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
