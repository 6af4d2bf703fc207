pub mod http;

use async_trait::async_trait;

use crate::error::AppError;

/// Fire-and-forget announcement of a ride record on a named topic. Only the
/// collaborator's success or failure is observed, never a response payload.
#[async_trait]
pub trait RidePublisher: Send + Sync {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), AppError>;
}
