//! Browser `localStorage` implementation of the session store.

use case_portal_access::{SessionStore, StorageKeys, StoreError};
use case_portal_core::{Credential, Identity};

/// Session store backed by `window.localStorage`.
///
/// Holds only the key names; the storage handle is looked up per call.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    keys: StorageKeys,
}

impl BrowserStore {
    /// Creates a store using the given key names.
    #[must_use]
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable {
            details: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable {
                details: format!("{e:?}"),
            })?
            .ok_or_else(|| StoreError::Unavailable {
                details: "localStorage disabled".to_string(),
            })
    }

    fn read(storage: &web_sys::Storage, key: &str) -> Option<String> {
        storage.get_item(key).ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<(Credential, Identity)> {
        let storage = Self::storage().ok()?;
        let credential = Credential::new(Self::read(&storage, &self.keys.credential)?).ok()?;
        let identity = Identity::new(Self::read(&storage, &self.keys.identity)?).ok()?;
        Some((credential, identity))
    }

    fn save(&self, credential: &Credential, identity: &Identity) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        for (key, value) in [
            (&self.keys.credential, credential.expose()),
            (&self.keys.identity, identity.as_str()),
        ] {
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::WriteFailed {
                    key: key.clone(),
                    details: format!("{e:?}"),
                })?;
        }
        Ok(())
    }

    fn clear(&self) {
        let Ok(storage) = Self::storage() else {
            return;
        };
        for key in [&self.keys.credential, &self.keys.identity] {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key = %key, error = ?e, "failed to remove session key");
            }
        }
    }
}
