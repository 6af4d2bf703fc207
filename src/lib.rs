pub mod api;
pub mod config;
pub mod error;
pub mod fleet;
pub mod models;
pub mod publish;
pub mod ride_id;
pub mod state;
