//! Domain error types for server functions.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors serving portal settings to the browser.
#[derive(Debug)]
pub enum SettingsError {
    /// The access configuration was not attached to the request.
    NotProvided { details: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotProvided { details } => {
                write!(f, "access configuration not available: {details}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl SettingsError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SettingsError::NotProvided { .. } => {
                ServerFnError::new("Portal settings unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_hides_details() {
        let err = SettingsError::NotProvided {
            details: "missing extension AccessConfig".to_string(),
        };
        assert!(err.to_string().contains("missing extension"));

        let server_err = err.into_server_error();
        assert!(!server_err.to_string().contains("missing extension"));
    }
}
