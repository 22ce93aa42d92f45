//! Session State Holder: the single owner of credential, identity, role,
//! and status for one browser context.
//!
//! Every profile fetch is tagged with a request generation. A fetch may only
//! change the session if no newer fetch, login, or logout happened since it
//! was issued; otherwise its outcome is discarded. Generation bumps and
//! outcome checks both run under the watch channel's write lock.
//!
//! Operations that start a fetch do their synchronous part immediately and
//! return the fetch as a future. The caller decides how to drive it
//! (`spawn_local` in the browser, `.await` in tests).

use case_portal_core::{Credential, Identity};
use futures::future::{Either, select};
use std::future::Future;
use std::pin::pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::AccessConfig;
use crate::error::ProfileError;
use crate::profile::{Profile, ProfileResolver};
use crate::session::{SessionSnapshot, SessionStatus};
use crate::store::SessionStore;
use crate::timer;

/// Result of driving a profile fetch to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetch was current and moved the session to this status.
    Applied(SessionStatus),
    /// A newer fetch, login, or logout happened first; nothing changed.
    Superseded,
}

/// Shared handle to the session state of one browser context.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct SessionHolder {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn SessionStore>,
    resolver: Arc<dyn ProfileResolver>,
    timeout: Duration,
    generation: AtomicU64,
    session: Mutex<Option<(Credential, Identity)>>,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionHolder {
    /// Creates a holder that has not read its persisted session yet.
    ///
    /// Until `hydrate` runs the snapshot is pending, so guarded views show a
    /// placeholder rather than redirecting.
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        resolver: Arc<dyn ProfileResolver>,
        config: &AccessConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::unhydrated());
        Self {
            inner: Arc::new(Inner {
                store,
                resolver,
                timeout: config.profile_timeout(),
                generation: AtomicU64::new(0),
                session: Mutex::new(None),
                state,
            }),
        }
    }

    /// Reads the persisted session.
    ///
    /// With nothing persisted the session becomes anonymous and `None` is
    /// returned. Otherwise the session becomes authenticating and the profile
    /// fetch is returned for the caller to drive.
    pub fn hydrate(&self) -> Option<impl Future<Output = RefreshOutcome> + use<>> {
        match self.inner.store.load() {
            Some(session) => {
                debug!(identity = %session.1, "restoring persisted session");
                Some(self.begin(Some(session), false))
            }
            None => {
                debug!("no persisted session");
                self.inner.state.send_modify(|snapshot| {
                    self.inner.generation.fetch_add(1, Ordering::SeqCst);
                    *self.inner.lock_session() = None;
                    *snapshot = SessionSnapshot::anonymous();
                });
                None
            }
        }
    }

    /// Starts a new profile fetch for the current session.
    ///
    /// Any fetch already in flight is superseded. Without a session the
    /// returned future resolves to `Applied(Anonymous)` without a request.
    pub fn refresh_profile(&self) -> impl Future<Output = RefreshOutcome> + use<> {
        self.begin(None, false)
    }

    /// Persists a new session and starts resolving its profile.
    ///
    /// The status is `Authenticating` as soon as this returns. The returned
    /// future completes the transition; callers typically spawn it and
    /// observe the result through `subscribe`.
    ///
    /// The store is written after older fetches are superseded, so none of
    /// them can clear the new session.
    pub fn login(
        &self,
        credential: Credential,
        identity: Identity,
    ) -> impl Future<Output = RefreshOutcome> + use<> {
        info!(identity = %identity, "login");
        self.begin(Some((credential, identity)), true)
    }

    /// Ends the session. Always succeeds, including when no session exists.
    ///
    /// Fetches in flight are superseded and cannot restore the session.
    pub fn logout(&self) {
        self.inner.state.send_modify(|snapshot| {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            *self.inner.lock_session() = None;
            self.inner.store.clear();
            *snapshot = SessionSnapshot::anonymous();
        });
        info!("logout");
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Returns a receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    fn begin(
        &self,
        replace: Option<(Credential, Identity)>,
        persist: bool,
    ) -> impl Future<Output = RefreshOutcome> + use<> {
        let mut generation = 0;
        let mut session = None;
        self.inner.state.send_modify(|snapshot| {
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let mut current = self.inner.lock_session();
            if let Some((credential, identity)) = &replace {
                if persist {
                    if let Err(err) = self.inner.store.save(credential, identity) {
                        warn!(error = %err, "failed to persist session");
                    }
                }
            }
            if replace.is_some() {
                *current = replace;
            }
            session = current.clone();
            *snapshot = match &session {
                Some((_, identity)) => SessionSnapshot::authenticating(identity.clone()),
                None => SessionSnapshot::anonymous(),
            };
        });

        let inner = Arc::clone(&self.inner);
        let span = info_span!("refresh_profile", generation);
        async move {
            let Some((credential, identity)) = session else {
                return RefreshOutcome::Applied(SessionStatus::Anonymous);
            };
            let result = inner.resolve_bounded(&credential, &identity).await;
            inner.apply(generation, identity, result)
        }
        .instrument(span)
    }
}

impl Inner {
    fn lock_session(&self) -> MutexGuard<'_, Option<(Credential, Identity)>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn resolve_bounded(
        &self,
        credential: &Credential,
        identity: &Identity,
    ) -> Result<Profile, ProfileError> {
        let fetch = self.resolver.resolve_profile(credential, identity);
        let deadline = pin!(timer::sleep(self.timeout));
        match select(fetch, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ProfileError::TimedOut {
                after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }

    fn apply(
        &self,
        generation: u64,
        identity: Identity,
        result: Result<Profile, ProfileError>,
    ) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::Superseded;
        self.state.send_if_modified(|snapshot| {
            if !self.is_current(generation) {
                return false;
            }
            match result {
                Ok(profile) => {
                    info!(identity = %identity, role = %profile.role(), "session authenticated");
                    *snapshot = SessionSnapshot::authenticated(identity, profile);
                }
                Err(err) => {
                    warn!(identity = %identity, error = %err, "profile fetch failed, ending session");
                    *self.lock_session() = None;
                    self.store.clear();
                    *snapshot = SessionSnapshot::failed(err.failure());
                }
            }
            outcome = RefreshOutcome::Applied(snapshot.status());
            true
        });

        if outcome == RefreshOutcome::Applied(SessionStatus::Failed) {
            self.state.send_if_modified(|snapshot| {
                if !self.is_current(generation) || snapshot.status() != SessionStatus::Failed {
                    return false;
                }
                *snapshot = snapshot.clone().settled();
                true
            });
            outcome = RefreshOutcome::Applied(SessionStatus::Anonymous);
        }

        if outcome == RefreshOutcome::Superseded {
            debug!(generation, "discarding superseded profile response");
        }
        outcome
    }
}
