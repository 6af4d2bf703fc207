use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("fleet lookup failed: {0}")]
    FleetLookup(String),

    #[error("fleet sample was empty")]
    EmptyFleet,

    #[error("publish failed: {0}")]
    Publish(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    // Every failure surfaces as the generic failure response, the same way a
    // hosting runtime reports an unhandled fault. No per-variant status codes.
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
