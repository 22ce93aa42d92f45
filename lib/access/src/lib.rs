//! Session state and role-based route authorization for the case portal.
//!
//! This crate provides:
//! - Roles (`Role`, `RoleSet`) and the account `Profile`
//! - The session snapshot observed by the UI (`SessionSnapshot`, `SessionStatus`)
//! - The Session State Holder (`SessionHolder`), the only writer of session state
//! - The route guard (`decide`) and the declarative route table (`RouteTable`)
//! - The persisted session store seam (`SessionStore`)
//!
//! # Session lifecycle
//!
//! A browser context starts with a pending snapshot. `hydrate` reads the
//! persisted credential: without one the session is anonymous, with one it
//! stays authenticating until the profile resolves. A failed profile fetch
//! clears the store and ends anonymous, so the guard redirects to login.
//!
//! # Example
//!
//! ```
//! use case_portal_access::{Decision, Role, RoleSet, SessionSnapshot, decide};
//!
//! let session = SessionSnapshot::anonymous();
//! let decision = decide(&session, &RoleSet::only(Role::Lawyer), "/abogado/casos");
//!
//! assert_eq!(
//!     decision,
//!     Decision::RedirectLogin { return_to: "/abogado/casos".to_string() }
//! );
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod holder;
pub mod profile;
pub mod role;
pub mod route;
pub mod session;
pub mod store;
mod timer;

pub use config::{AccessConfig, RoutePaths, StorageKeys};
pub use error::{LoginError, ProfileError, ProfileFailure, StoreError};
pub use guard::{Decision, decide, landing_path};
pub use holder::{RefreshOutcome, SessionHolder};
pub use profile::{Profile, ProfileResolver};
pub use role::{Role, RoleSet, UnknownRoleError};
pub use route::{RouteDeclaration, RouteTable};
pub use session::{SessionSnapshot, SessionStatus};
pub use store::{MemoryStore, SessionStore};
