//! Session state as observed by the UI.
//!
//! A `SessionSnapshot` is an immutable view of the holder's state at one
//! point in time. Snapshots never carry the credential itself.

use case_portal_core::Identity;

use crate::error::ProfileFailure;
use crate::profile::Profile;
use crate::role::Role;

/// Authentication status of the current browser context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// No session exists.
    Anonymous,
    /// A credential is present and its profile is being resolved.
    Authenticating,
    /// The profile resolved and the role is known.
    Authenticated,
    /// A previously valid credential lapsed (expired, unreachable, malformed).
    Failed,
}

/// Point-in-time view of the session.
///
/// `role` and `profile` are only populated in the `Authenticated` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    status: SessionStatus,
    identity: Option<Identity>,
    profile: Option<Profile>,
    last_failure: Option<ProfileFailure>,
}

impl SessionSnapshot {
    /// A session that never existed or was logged out.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            identity: None,
            profile: None,
            last_failure: None,
        }
    }

    /// A session waiting for its profile to resolve.
    #[must_use]
    pub fn authenticating(identity: Identity) -> Self {
        Self {
            status: SessionStatus::Authenticating,
            identity: Some(identity),
            profile: None,
            last_failure: None,
        }
    }

    /// The state rendered before the client has read its persisted session.
    ///
    /// Server rendering and the first client frame both use it, so protected
    /// routes show a placeholder instead of redirecting to login.
    #[must_use]
    pub fn unhydrated() -> Self {
        Self {
            status: SessionStatus::Authenticating,
            identity: None,
            profile: None,
            last_failure: None,
        }
    }

    /// A session whose profile resolved.
    #[must_use]
    pub fn authenticated(identity: Identity, profile: Profile) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            identity: Some(identity),
            profile: Some(profile),
            last_failure: None,
        }
    }

    /// A session whose profile fetch failed. Identity and role are cleared.
    #[must_use]
    pub fn failed(failure: ProfileFailure) -> Self {
        Self {
            status: SessionStatus::Failed,
            identity: None,
            profile: None,
            last_failure: Some(failure),
        }
    }

    /// Settles a failed session into `Anonymous`, keeping the diagnostic.
    #[must_use]
    pub fn settled(self) -> Self {
        Self {
            status: SessionStatus::Anonymous,
            identity: None,
            profile: None,
            last_failure: self.last_failure,
        }
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the identity, if a session is in progress or established.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Returns the role. Only `Some` when authenticated.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self.status {
            SessionStatus::Authenticated => self.profile.as_ref().map(Profile::role),
            _ => None,
        }
    }

    /// Returns the resolved profile. Only `Some` when authenticated.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Returns why the last session lapsed, if it did.
    #[must_use]
    pub fn last_failure(&self) -> Option<ProfileFailure> {
        self.last_failure
    }

    /// Returns true if the session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Returns true if the session is still resolving.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Authenticating
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new("a@b.com").expect("valid identity")
    }

    #[test]
    fn anonymous_has_no_role() {
        let snapshot = SessionSnapshot::anonymous();
        assert_eq!(snapshot.status(), SessionStatus::Anonymous);
        assert!(snapshot.role().is_none());
        assert!(snapshot.identity().is_none());
        assert!(snapshot.last_failure().is_none());
    }

    #[test]
    fn authenticating_keeps_identity_without_role() {
        let snapshot = SessionSnapshot::authenticating(identity());
        assert!(snapshot.is_pending());
        assert_eq!(snapshot.identity(), Some(&identity()));
        assert!(snapshot.role().is_none());
    }

    #[test]
    fn authenticated_exposes_role() {
        let snapshot = SessionSnapshot::authenticated(identity(), Profile::new(Role::Lawyer));
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.role(), Some(Role::Lawyer));
    }

    #[test]
    fn failed_settles_into_anonymous_with_diagnostic() {
        let snapshot = SessionSnapshot::failed(ProfileFailure::Unauthorized);
        assert_eq!(snapshot.status(), SessionStatus::Failed);
        assert!(snapshot.role().is_none());

        let settled = snapshot.settled();
        assert_eq!(settled.status(), SessionStatus::Anonymous);
        assert_eq!(settled.last_failure(), Some(ProfileFailure::Unauthorized));
        assert!(settled.role().is_none());
    }

    #[test]
    fn unhydrated_is_pending_without_identity() {
        let snapshot = SessionSnapshot::unhydrated();
        assert!(snapshot.is_pending());
        assert!(snapshot.identity().is_none());
        assert_eq!(snapshot.status(), SessionStatus::Authenticating);
    }
}
