//! Persisted session store.
//!
//! The store holds the credential and identity between page loads. Only the
//! session holder writes to it.

use case_portal_core::{Credential, Identity};
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

/// Durable key-value storage for the credential and identity.
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session.
    ///
    /// Returns `None` unless both keys hold usable values.
    fn load(&self) -> Option<(Credential, Identity)>;

    /// Persists a credential and identity, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn save(&self, credential: &Credential, identity: &Identity) -> Result<(), StoreError>;

    /// Removes both keys. Never fails; missing keys are ignored.
    fn clear(&self);
}

/// In-process store used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entry: Mutex<Option<(Credential, Identity)>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a persisted session.
    #[must_use]
    pub fn with_session(credential: Credential, identity: Identity) -> Self {
        Self {
            entry: Mutex::new(Some((credential, identity))),
        }
    }

    /// Returns true if a session is persisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<(Credential, Identity)> {
        self.entry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, credential: &Credential, identity: &Identity) -> Result<(), StoreError> {
        *self.entry.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((credential.clone(), identity.clone()));
        Ok(())
    }

    fn clear(&self) {
        *self.entry.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (Credential, Identity) {
        (
            Credential::new("token123").expect("valid credential"),
            Identity::new("a@b.com").expect("valid identity"),
        )
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let (credential, identity) = session();

        store.save(&credential, &identity).expect("save");

        let (loaded_credential, loaded_identity) = store.load().expect("persisted session");
        assert_eq!(loaded_credential.expose(), "token123");
        assert_eq!(loaded_identity.as_str(), "a@b.com");
    }

    #[test]
    fn clear_is_idempotent() {
        let (credential, identity) = session();
        let store = MemoryStore::with_session(credential, identity);

        store.clear();
        store.clear();

        assert!(store.is_empty());
    }
}
