use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use tracing::info;

use crate::error::AppError;
use crate::fleet;
use crate::models::ride::{RideRecord, RideRequest};
use crate::ride_id;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ride", post(request_ride))
}

async fn request_ride(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RideRequest>,
) -> Result<(StatusCode, Json<RideRecord>), AppError> {
    info!(pickup_location = %payload.pickup_location, "ride requested");

    let ride_id = ride_id::generate(&state.node_id);
    let request_time = ride_id::request_time(&ride_id)
        .ok_or_else(|| AppError::Internal("ride id carries no timestamp".to_string()))?;

    let sample = state.fleet.sample(fleet::SAMPLE_LIMIT).await?;
    let unicorn = fleet::pick_unit(&sample, &mut rand::thread_rng())
        .ok_or(AppError::EmptyFleet)?
        .clone();

    let record = RideRecord {
        ride_id: ride_id.to_string(),
        unicorn,
        request_time: ride_id::format_request_time(request_time),
    };

    let body = serde_json::to_string(&record)
        .map_err(|err| AppError::Internal(format!("failed to serialize ride record: {err}")))?;

    if let Some(publisher) = &state.publisher {
        publisher.publish(&state.publish_topic, &body).await?;
        info!(
            topic = %state.publish_topic,
            ride_id = %record.ride_id,
            "ride record published"
        );
    }

    info!(response = %body, "ride created");

    Ok((StatusCode::CREATED, Json(record)))
}
