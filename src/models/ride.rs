use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque fleet unit record. The fleet-lookup collaborator owns the shape;
/// this service passes it through unmodified.
pub type FleetUnit = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    /// Extracted from the request body but never validated; any JSON value
    /// (or none at all) is accepted.
    #[serde(rename = "PickupLocation", default)]
    pub pickup_location: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRecord {
    #[serde(rename = "RideId")]
    pub ride_id: String,
    #[serde(rename = "Unicorn")]
    pub unicorn: FleetUnit,
    #[serde(rename = "RequestTime")]
    pub request_time: String,
}
