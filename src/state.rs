use std::sync::Arc;

use crate::fleet::FleetLookup;
use crate::publish::RidePublisher;

pub struct AppState {
    pub fleet: Arc<dyn FleetLookup>,
    pub publisher: Option<Arc<dyn RidePublisher>>,
    pub publish_topic: String,
    /// Node id baked into every v1 ride id, drawn once per process.
    pub node_id: [u8; 6],
}

impl AppState {
    pub fn new(
        fleet: Arc<dyn FleetLookup>,
        publisher: Option<Arc<dyn RidePublisher>>,
        publish_topic: String,
    ) -> Self {
        Self {
            fleet,
            publisher,
            publish_topic,
            node_id: rand::random(),
        }
    }
}
