mod api;
mod config;
mod error;
mod fleet;
mod models;
mod publish;
mod ride_id;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::fleet::http::HttpFleetClient;
use crate::publish::RidePublisher;
use crate::publish::http::HttpPublisher;

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let client = reqwest::Client::new();
    let fleet = Arc::new(HttpFleetClient::new(
        client.clone(),
        config.fleet_endpoint.clone(),
    ));
    let publisher = config
        .publish_endpoint
        .clone()
        .map(|endpoint| Arc::new(HttpPublisher::new(client, endpoint)) as Arc<dyn RidePublisher>);

    let shared_state = Arc::new(state::AppState::new(
        fleet,
        publisher,
        config.publish_topic.clone(),
    ));

    let app = api::rest::router(shared_state);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| error::AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| error::AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
