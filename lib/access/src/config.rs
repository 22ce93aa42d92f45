//! Access configuration: backend endpoints, storage keys, timeout, and the
//! paths the route guard redirects to.
//!
//! Fields with defaults can be omitted when loading from environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::role::Role;

/// Configuration for the session holder and route guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Base URL of the REST backend (e.g., "https://api.leydelhielo.co").
    api_base_url: String,
    /// Path of the profile lookup endpoint; the identity is appended.
    /// Default: "/cuentas/email"
    #[serde(default = "default_profile_path")]
    profile_path: String,
    /// Path of the login endpoint.
    /// Default: "/auth/login"
    #[serde(default = "default_login_path")]
    login_path: String,
    /// Upper bound for one profile fetch, in milliseconds.
    /// Default: 10000
    #[serde(default = "default_profile_timeout_ms")]
    profile_timeout_ms: u64,
    /// Keys used in the persisted session store.
    #[serde(default)]
    storage: StorageKeys,
    /// Paths used for redirects and post-login landing.
    #[serde(default)]
    routes: RoutePaths,
}

fn default_profile_path() -> String {
    "/cuentas/email".to_string()
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_profile_timeout_ms() -> u64 {
    10_000
}

impl AccessConfig {
    /// Creates a configuration with defaults for optional fields.
    #[must_use]
    pub fn new(api_base_url: String) -> Self {
        Self {
            api_base_url,
            profile_path: default_profile_path(),
            login_path: default_login_path(),
            profile_timeout_ms: default_profile_timeout_ms(),
            storage: StorageKeys::default(),
            routes: RoutePaths::default(),
        }
    }

    /// Sets the profile fetch timeout.
    #[must_use]
    pub fn with_profile_timeout(mut self, timeout: Duration) -> Self {
        self.profile_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the backend base URL without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Returns the full URL of the profile endpoint for `identity`.
    #[must_use]
    pub fn profile_url(&self, identity: &str) -> String {
        format!(
            "{}{}/{}",
            self.api_base_url(),
            self.profile_path,
            urlencoding::encode(identity)
        )
    }

    /// Returns the full URL of the login endpoint.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_base_url(), self.login_path)
    }

    /// Returns the profile fetch timeout.
    #[must_use]
    pub fn profile_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_timeout_ms)
    }

    /// Returns the storage keys.
    #[must_use]
    pub fn storage(&self) -> &StorageKeys {
        &self.storage
    }

    /// Returns the redirect paths.
    #[must_use]
    pub fn routes(&self) -> &RoutePaths {
        &self.routes
    }
}

/// Keys of the persisted session fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// Key holding the bearer token. Default: "jwt"
    #[serde(default = "default_credential_key")]
    pub credential: String,
    /// Key holding the identity. Default: "userEmail"
    #[serde(default = "default_identity_key")]
    pub identity: String,
}

fn default_credential_key() -> String {
    "jwt".to_string()
}

fn default_identity_key() -> String {
    "userEmail".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            credential: default_credential_key(),
            identity: default_identity_key(),
        }
    }
}

/// Paths the guard and shell navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePaths {
    /// Login page. Default: "/login"
    #[serde(default = "default_login_route")]
    pub login: String,
    /// Public landing page. Default: "/"
    #[serde(default = "default_home_route")]
    pub home: String,
    /// Landing page for clients. Default: "/cliente/casos"
    #[serde(default = "default_client_landing")]
    pub client_landing: String,
    /// Landing page for lawyers. Default: "/abogado/casos"
    #[serde(default = "default_lawyer_landing")]
    pub lawyer_landing: String,
    /// Landing page for admins. Default: "/admin/crear-abogado"
    #[serde(default = "default_admin_landing")]
    pub admin_landing: String,
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_client_landing() -> String {
    "/cliente/casos".to_string()
}

fn default_lawyer_landing() -> String {
    "/abogado/casos".to_string()
}

fn default_admin_landing() -> String {
    "/admin/crear-abogado".to_string()
}

impl RoutePaths {
    /// Returns the default landing path for a role.
    #[must_use]
    pub fn landing_for(&self, role: Role) -> &str {
        match role {
            Role::Client => &self.client_landing,
            Role::Lawyer => &self.lawyer_landing,
            Role::Admin => &self.admin_landing,
        }
    }
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            login: default_login_route(),
            home: default_home_route(),
            client_landing: default_client_landing(),
            lawyer_landing: default_lawyer_landing(),
            admin_landing: default_admin_landing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_defaults() {
        let config = AccessConfig::new("https://api.example.com/".to_string());

        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.login_url(), "https://api.example.com/auth/login");
        assert_eq!(config.profile_timeout(), Duration::from_secs(10));
        assert_eq!(config.storage().credential, "jwt");
        assert_eq!(config.storage().identity, "userEmail");
        assert_eq!(config.routes().login, "/login");
        assert_eq!(config.routes().home, "/");
    }

    #[test]
    fn profile_url_encodes_identity() {
        let config = AccessConfig::new("https://api.example.com".to_string());
        assert_eq!(
            config.profile_url("a+b@c.com"),
            "https://api.example.com/cuentas/email/a%2Bb%40c.com"
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{ "api_base_url": "http://localhost:8080" }"#;

        let config: AccessConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.api_base_url(), "http://localhost:8080");
        assert_eq!(config.profile_timeout(), Duration::from_millis(10_000));
        assert_eq!(config.routes().client_landing, "/cliente/casos");
    }

    #[test]
    fn nested_overrides_are_honoured() {
        let json = r#"{
            "api_base_url": "http://localhost:8080",
            "profile_timeout_ms": 2500,
            "storage": { "credential": "token" },
            "routes": { "home": "/inicio" }
        }"#;

        let config: AccessConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.profile_timeout(), Duration::from_millis(2500));
        assert_eq!(config.storage().credential, "token");
        assert_eq!(config.storage().identity, "userEmail");
        assert_eq!(config.routes().home, "/inicio");
        assert_eq!(config.routes().login, "/login");
    }

    #[test]
    fn landing_for_each_role() {
        let routes = RoutePaths::default();
        assert_eq!(routes.landing_for(Role::Client), "/cliente/casos");
        assert_eq!(routes.landing_for(Role::Lawyer), "/abogado/casos");
        assert_eq!(routes.landing_for(Role::Admin), "/admin/crear-abogado");
    }
}
