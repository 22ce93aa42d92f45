//! Value types for the persisted session fields.
//!
//! A `Credential` is the opaque bearer token handed out by the login endpoint.
//! An `Identity` is the stable lookup key (the account email) used to resolve
//! the account's profile and role.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when a session value fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValueError {
    /// The kind of value that failed validation.
    pub value_type: &'static str,
    /// The reason for the failure.
    pub reason: String,
}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.value_type, self.reason)
    }
}

impl std::error::Error for InvalidValueError {}

/// Opaque bearer token proving an authenticated session.
///
/// The token is never printed: `Debug` redacts it so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Credential(String);

impl Credential {
    /// Wraps a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidValueError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidValueError {
                value_type: "credential",
                reason: "token is empty".to_string(),
            });
        }
        Ok(Self(token))
    }

    /// Returns the raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns the value of an `Authorization` header carrying this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for Credential {
    type Error = InvalidValueError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<Credential> for String {
    fn from(credential: Credential) -> Self {
        credential.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Stable user lookup key (the account email).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from an email address.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or has no `@`.
    pub fn new(email: impl Into<String>) -> Result<Self, InvalidValueError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(InvalidValueError {
                value_type: "identity",
                reason: "email is empty".to_string(),
            });
        }
        if !trimmed.contains('@') {
            return Err(InvalidValueError {
                value_type: "identity",
                reason: format!("'{trimmed}' is not an email address"),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Identity {
    type Error = InvalidValueError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::new(email)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl std::str::FromStr for Identity {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
