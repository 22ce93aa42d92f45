//! Account profile and the backend seams used by the session holder.
//!
//! The holder never talks HTTP itself: it resolves profiles through a
//! `ProfileResolver`.

use async_trait::async_trait;
use case_portal_core::{Credential, Identity};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::role::Role;

/// Profile fields of an account, as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The account role.
    #[serde(rename = "rol")]
    role: Role,
    /// Display name.
    #[serde(rename = "nombre", default)]
    name: Option<String>,
    /// Account email.
    #[serde(default)]
    email: Option<String>,
    /// National identity number.
    #[serde(rename = "cedula", default)]
    national_id: Option<String>,
}

impl Profile {
    /// Creates a profile with only a role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: None,
            email: None,
            national_id: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the account email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the national identity number.
    #[must_use]
    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    /// Returns the account role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the display name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the account email, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the national identity number, if known.
    #[must_use]
    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    /// Returns the best label for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.role.label())
    }
}

/// Resolves an identity's profile using its bearer credential.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ProfileResolver: Send + Sync {
    /// Fetches the profile for `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is rejected, the request fails,
    /// or the response carries no role.
    async fn resolve_profile(
        &self,
        credential: &Credential,
        identity: &Identity,
    ) -> Result<Profile, ProfileError>;
}
