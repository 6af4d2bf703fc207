use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::publish::RidePublisher;

/// Publishes ride records by POSTing them to `<endpoint>/<topic>`.
pub struct HttpPublisher {
    client: Client,
    endpoint: String,
}

impl HttpPublisher {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl RidePublisher for HttpPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), AppError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), topic);

        self.client
            .post(&url)
            .header("content-type", "application/json")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|err| AppError::Publish(err.to_string()))?
            .error_for_status()
            .map_err(|err| AppError::Publish(err.to_string()))?;

        Ok(())
    }
}
