use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::AppError;
use crate::fleet::FleetLookup;
use crate::models::ride::FleetUnit;

/// Fleet lookup over HTTP: GET the configured endpoint, decode a JSON array
/// of fleet units, keep the first `limit` of them.
pub struct HttpFleetClient {
    client: Client,
    endpoint: String,
}

impl HttpFleetClient {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl FleetLookup for HttpFleetClient {
    async fn sample(&self, limit: usize) -> Result<Vec<FleetUnit>, AppError> {
        let mut units: Vec<FleetUnit> = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| AppError::FleetLookup(err.to_string()))?
            .error_for_status()
            .map_err(|err| AppError::FleetLookup(err.to_string()))?
            .json()
            .await
            .map_err(|err| AppError::FleetLookup(format!("invalid fleet payload: {err}")))?;

        units.truncate(limit);
        debug!(endpoint = %self.endpoint, sample_size = units.len(), "fleet sample fetched");

        Ok(units)
    }
}
