use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub fleet_endpoint: String,
    pub publish_endpoint: Option<String>,
    pub publish_topic: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            fleet_endpoint: env::var("FLEET_ENDPOINT")
                .map_err(|_| AppError::Internal("FLEET_ENDPOINT is not set".to_string()))?,
            publish_endpoint: env::var("PUBLISH_ENDPOINT").ok(),
            publish_topic: env::var("PUBLISH_TOPIC").unwrap_or_else(|_| "rides".to_string()),
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
