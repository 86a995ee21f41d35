use std::env;

use thiserror::Error;

use crate::services::places::places_client::{PlacesClientConfig, DEFAULT_PLACES_HOST};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Clone)]
pub struct AppConfig {
    pub places: PlacesClientConfig,
    pub auth_key: Option<String>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(AppConfig {
            places: PlacesClientConfig {
                api_key: var("PLACES_API_KEY").ok_or(ConfigError::Missing("PLACES_API_KEY"))?,
                host: var("PLACES_API_HOST").unwrap_or_else(|| DEFAULT_PLACES_HOST.to_string()),
            },
            auth_key: var("AUTH_KEY"),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
