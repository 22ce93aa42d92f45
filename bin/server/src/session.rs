//! Session context for the browser shell.
//!
//! One `SessionHolder` is mounted per browser context and provided to
//! components through Leptos context. Components read the snapshot signal
//! and call `login`/`logout`; only the holder mutates session state.
//!
//! The holder is built on the client after the access configuration arrives.
//! Until then, and during server rendering, the snapshot is pending.

use case_portal_access::{RoutePaths, SessionHolder, SessionSnapshot};
use case_portal_api::PortalApi;
use case_portal_core::{Credential, Identity};
use leptos::prelude::*;

/// Handle to the session of the current browser context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    snapshot: RwSignal<SessionSnapshot>,
    paths: RwSignal<RoutePaths>,
    holder: StoredValue<Option<SessionHolder>, LocalStorage>,
    api: StoredValue<Option<PortalApi>, LocalStorage>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            snapshot: RwSignal::new(SessionSnapshot::unhydrated()),
            paths: RwSignal::new(RoutePaths::default()),
            holder: StoredValue::new_local(None),
            api: StoredValue::new_local(None),
        }
    }

    /// Returns the current snapshot, tracking it reactively.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.get()
    }

    /// Returns the redirect paths, tracking them reactively.
    pub fn paths(&self) -> RoutePaths {
        self.paths.get()
    }

    /// Returns the REST client once the shell is ready.
    pub fn api(&self) -> Option<PortalApi> {
        self.api.get_value()
    }

    /// Starts a session for a credential returned by the login endpoint.
    ///
    /// Returns immediately; the snapshot moves to authenticated or anonymous
    /// when the profile resolves.
    pub fn login(&self, credential: Credential, identity: Identity) {
        let Some(holder) = self.holder.get_value() else {
            tracing::warn!("login before the session holder is ready");
            return;
        };
        let refresh = holder.login(credential, identity);
        self.snapshot.set(holder.snapshot());
        leptos::task::spawn_local(async move {
            refresh.await;
        });
    }

    /// Ends the session. The snapshot is anonymous when this returns.
    pub fn logout(&self) {
        if let Some(holder) = self.holder.get_value() {
            holder.logout();
        }
        self.snapshot.set(SessionSnapshot::anonymous());
    }

    #[cfg(feature = "hydrate")]
    fn start(self, config: case_portal_access::AccessConfig) {
        use crate::store::BrowserStore;
        use std::sync::Arc;

        let api = PortalApi::new(config.clone());
        let holder = SessionHolder::new(
            Arc::new(BrowserStore::new(config.storage().clone())),
            Arc::new(api.clone()),
            &config,
        );
        self.paths.set(config.routes().clone());
        self.api.set_value(Some(api));
        self.holder.set_value(Some(holder.clone()));

        let mut updates = holder.subscribe();
        let snapshot = self.snapshot;
        leptos::task::spawn_local(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        });

        if let Some(refresh) = holder.hydrate() {
            leptos::task::spawn_local(async move {
                refresh.await;
            });
        }
        self.snapshot.set(holder.snapshot());
    }
}

/// Mounts the session for this browser context and provides it as context.
pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::settings::get_access_config().await {
                Ok(config) => session.start(config),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load portal settings");
                    session.snapshot.set(SessionSnapshot::anonymous());
                }
            }
        });
    });

    session
}

/// Returns the session provided by the shell.
///
/// # Panics
///
/// Panics if called outside the shell.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
