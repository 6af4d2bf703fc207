pub mod http;

use async_trait::async_trait;
use rand::Rng;

use crate::error::AppError;
use crate::models::ride::FleetUnit;

/// How many fleet units a lookup fetches per request. Selection is uniform
/// across this sample only; the sample always starts at the head of the fleet
/// listing, so it is not a random subset of the whole fleet.
pub const SAMPLE_LIMIT: usize = 5;

#[async_trait]
pub trait FleetLookup: Send + Sync {
    async fn sample(&self, limit: usize) -> Result<Vec<FleetUnit>, AppError>;
}

pub fn pick_unit<'a, R: Rng>(units: &'a [FleetUnit], rng: &mut R) -> Option<&'a FleetUnit> {
    if units.is_empty() {
        return None;
    }

    Some(&units[rng.gen_range(0..units.len())])
}
