//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`AccessConfig`](case_portal_access::AccessConfig) for the backend
//! endpoints, storage keys, and redirect paths handed to the browser.

use case_portal_access::AccessConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
///
/// Nested keys use `__`, e.g. `ACCESS__API_BASE_URL` or
/// `ACCESS__ROUTES__HOME`.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Session and routing configuration shared with the browser.
    pub access: AccessConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
