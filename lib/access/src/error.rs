//! Error types for the access crate.
//!
//! - `ProfileError`: profile resolution failures (collapsed into a logout)
//! - `LoginError`: login endpoint failures (shown on the login page)
//! - `StoreError`: persisted session store failures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure category recorded on the session when a profile fetch fails.
///
/// Every category ends the session the same way; the category only feeds
/// diagnostics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFailure {
    /// The credential was rejected (HTTP 401/403, expired token).
    Unauthorized,
    /// The endpoint answered with another non-success status.
    Rejected,
    /// The request never completed (network unreachable, CORS, DNS).
    Transport,
    /// The response was missing the profile or role.
    Malformed,
    /// No answer within the configured bound.
    TimedOut,
}

impl fmt::Display for ProfileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unauthorized => "unauthorized",
            Self::Rejected => "rejected",
            Self::Transport => "transport",
            Self::Malformed => "malformed",
            Self::TimedOut => "timed out",
        };
        f.write_str(label)
    }
}

/// Errors from profile resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The credential is invalid or expired.
    Unauthorized { status: u16 },
    /// The endpoint returned a non-success status.
    Rejected { status: u16 },
    /// The request failed before a response arrived.
    Transport { details: String },
    /// The response body could not be understood.
    Malformed { details: String },
    /// The request exceeded the configured timeout.
    TimedOut { after_ms: u64 },
}

impl ProfileError {
    /// Returns the failure category.
    #[must_use]
    pub fn failure(&self) -> ProfileFailure {
        match self {
            Self::Unauthorized { .. } => ProfileFailure::Unauthorized,
            Self::Rejected { .. } => ProfileFailure::Rejected,
            Self::Transport { .. } => ProfileFailure::Transport,
            Self::Malformed { .. } => ProfileFailure::Malformed,
            Self::TimedOut { .. } => ProfileFailure::TimedOut,
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized { status } => {
                write!(f, "credential rejected by profile endpoint (HTTP {status})")
            }
            Self::Rejected { status } => {
                write!(f, "profile endpoint returned HTTP {status}")
            }
            Self::Transport { details } => {
                write!(f, "profile request failed: {details}")
            }
            Self::Malformed { details } => {
                write!(f, "malformed profile response: {details}")
            }
            Self::TimedOut { after_ms } => {
                write!(f, "profile request timed out after {after_ms}ms")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors from the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Identity or secret was not accepted.
    InvalidCredentials,
    /// The endpoint returned a non-success status.
    Rejected { status: u16 },
    /// The request failed before a response arrived.
    Transport { details: String },
    /// The response did not carry a usable token.
    Malformed { details: String },
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::Rejected { status } => write!(f, "login endpoint returned HTTP {status}"),
            Self::Transport { details } => write!(f, "login request failed: {details}"),
            Self::Malformed { details } => write!(f, "malformed login response: {details}"),
        }
    }
}

impl std::error::Error for LoginError {}

/// Errors from the persisted session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage is not reachable (no window, storage disabled).
    Unavailable { details: String },
    /// A write or removal failed.
    WriteFailed { key: String, details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { details } => {
                write!(f, "session storage unavailable: {details}")
            }
            Self::WriteFailed { key, details } => {
                write!(f, "failed to write session key '{key}': {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_error_maps_to_failure_category() {
        assert_eq!(
            ProfileError::Unauthorized { status: 401 }.failure(),
            ProfileFailure::Unauthorized
        );
        assert_eq!(
            ProfileError::TimedOut { after_ms: 10 }.failure(),
            ProfileFailure::TimedOut
        );
        assert_eq!(
            ProfileError::Malformed {
                details: "no role".to_string()
            }
            .failure(),
            ProfileFailure::Malformed
        );
    }

    #[test]
    fn profile_error_display_includes_status() {
        let err = ProfileError::Unauthorized { status: 401 };
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn login_error_invalid_credentials_display() {
        let err = LoginError::InvalidCredentials;
        assert!(err.to_string().contains("invalid email or password"));
    }

    #[test]
    fn store_error_write_failed_display() {
        let err = StoreError::WriteFailed {
            key: "jwt".to_string(),
            details: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("jwt"));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
