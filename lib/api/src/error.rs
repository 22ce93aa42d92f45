//! REST client error types.

use case_portal_access::{LoginError, ProfileError};
use std::fmt;

/// Errors from backend requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The bearer credential or login secret was rejected (HTTP 401/403).
    Unauthorized {
        /// Response status code.
        status: u16,
    },
    /// The backend answered with another non-success status.
    Status {
        /// Response status code.
        status: u16,
    },
    /// The request did not complete.
    Transport {
        /// Error details.
        details: String,
    },
    /// The response body could not be decoded.
    Decode {
        /// Error details.
        details: String,
    },
}

impl ApiError {
    /// Classifies a non-success status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized { status },
            _ => Self::Status { status },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized { status } => write!(f, "request not authorized (HTTP {status})"),
            Self::Status { status } => write!(f, "backend returned HTTP {status}"),
            Self::Transport { details } => write!(f, "request failed: {details}"),
            Self::Decode { details } => write!(f, "could not decode response: {details}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for ProfileError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { status } => Self::Unauthorized { status },
            ApiError::Status { status } => Self::Rejected { status },
            ApiError::Transport { details } => Self::Transport { details },
            ApiError::Decode { details } => Self::Malformed { details },
        }
    }
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { .. } => Self::InvalidCredentials,
            ApiError::Status { status } => Self::Rejected { status },
            ApiError::Transport { details } => Self::Transport { details },
            ApiError::Decode { details } => Self::Malformed { details },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_and_unauthorized_are_unauthorized() {
        assert_eq!(
            ApiError::from_status(401),
            ApiError::Unauthorized { status: 401 }
        );
        assert_eq!(
            ApiError::from_status(403),
            ApiError::Unauthorized { status: 403 }
        );
        assert_eq!(ApiError::from_status(500), ApiError::Status { status: 500 });
    }

    #[test]
    fn unauthorized_maps_to_profile_unauthorized() {
        let err: ProfileError = ApiError::Unauthorized { status: 401 }.into();
        assert_eq!(err, ProfileError::Unauthorized { status: 401 });
    }

    #[test]
    fn unauthorized_login_is_invalid_credentials() {
        let err: LoginError = ApiError::Unauthorized { status: 403 }.into();
        assert_eq!(err, LoginError::InvalidCredentials);

        let err: LoginError = ApiError::Status { status: 502 }.into();
        assert_eq!(err, LoginError::Rejected { status: 502 });
    }
}
