use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://airline.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Insert demo airplanes, cities, staff and flights at startup when the store is empty.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    value: bind_address.clone(),
                    reason: e.to_string(),
                })?;

        let seed_demo_data = match std::env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_flag("SEED_DEMO_DATA", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_demo_data,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
