//! Route guard: decides what a route shows for the current session.
//!
//! The guard never mutates the session. `Failed` and `Anonymous` are treated
//! the same; the difference is only diagnostic.

use crate::config::RoutePaths;
use crate::role::RoleSet;
use crate::session::{SessionSnapshot, SessionStatus};

/// Outcome of guarding a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Show the view.
    Render,
    /// Send the visitor to the login page, remembering where they wanted to go.
    RedirectLogin {
        /// The requested path, restored after a successful login.
        return_to: String,
    },
    /// Authenticated with a role the route does not admit.
    RedirectHome,
    /// The session is still resolving; show a placeholder.
    Pending,
}

impl Decision {
    /// Returns where a redirect decision sends the visitor.
    ///
    /// `None` for `Render` and `Pending`.
    #[must_use]
    pub fn location(&self, paths: &RoutePaths) -> Option<String> {
        match self {
            Self::Render | Self::Pending => None,
            Self::RedirectHome => Some(paths.home.clone()),
            Self::RedirectLogin { return_to } => Some(format!(
                "{}?next={}",
                paths.login,
                urlencoding::encode(return_to)
            )),
        }
    }
}

/// Decides whether `requested_path` may be shown for `session`.
#[must_use]
pub fn decide(session: &SessionSnapshot, required: &RoleSet, requested_path: &str) -> Decision {
    match session.status() {
        SessionStatus::Authenticating => Decision::Pending,
        _ if required.is_public() => Decision::Render,
        SessionStatus::Anonymous | SessionStatus::Failed => Decision::RedirectLogin {
            return_to: requested_path.to_string(),
        },
        SessionStatus::Authenticated => match session.role() {
            Some(role) if required.contains(role) => Decision::Render,
            _ => Decision::RedirectHome,
        },
    }
}

/// Resolves where to go after a successful login.
///
/// `next` is honoured only when it is a local absolute path other than the
/// login page; anything else falls back to the role's landing path.
#[must_use]
pub fn landing_path(next: Option<&str>, session: &SessionSnapshot, paths: &RoutePaths) -> String {
    if let Some(next) = next.map(str::trim).filter(|next| is_local_return(next, paths)) {
        return next.to_string();
    }
    match session.role() {
        Some(role) => paths.landing_for(role).to_string(),
        None => paths.home.clone(),
    }
}

fn is_local_return(next: &str, paths: &RoutePaths) -> bool {
    if !next.starts_with('/') || next.starts_with("//") || next.contains('\\') {
        return false;
    }
    let path = next.split(['?', '#']).next().unwrap_or(next);
    path != paths.login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileFailure;
    use crate::profile::Profile;
    use crate::role::Role;
    use case_portal_core::Identity;

    fn identity() -> Identity {
        Identity::new("a@b.com").expect("valid identity")
    }

    fn authenticated(role: Role) -> SessionSnapshot {
        SessionSnapshot::authenticated(identity(), Profile::new(role))
    }

    fn required_sets() -> Vec<RoleSet> {
        vec![
            RoleSet::public(),
            RoleSet::only(Role::Client),
            RoleSet::only(Role::Lawyer),
            RoleSet::only(Role::Admin),
            RoleSet::of(&[Role::Client, Role::Lawyer]),
            RoleSet::of(&Role::ALL),
        ]
    }

    #[test]
    fn authenticated_on_public_route_renders() {
        for role in Role::ALL {
            assert_eq!(
                decide(&authenticated(role), &RoleSet::public(), "/"),
                Decision::Render
            );
        }
    }

    #[test]
    fn anonymous_on_protected_route_redirects_with_path() {
        let session = SessionSnapshot::anonymous();
        for required in required_sets().into_iter().filter(|r| !r.is_public()) {
            for path in ["/cliente/casos", "/caso/42", "/abogado/casos?page=2"] {
                assert_eq!(
                    decide(&session, &required, path),
                    Decision::RedirectLogin {
                        return_to: path.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn failed_is_treated_like_anonymous() {
        let failed = SessionSnapshot::failed(ProfileFailure::Transport);
        let settled = failed.clone().settled();
        for required in required_sets() {
            assert_eq!(
                decide(&failed, &required, "/caso/7"),
                decide(&settled, &required, "/caso/7")
            );
        }
    }

    #[test]
    fn anonymous_on_public_route_renders() {
        assert_eq!(
            decide(&SessionSnapshot::anonymous(), &RoleSet::public(), "/aboutus"),
            Decision::Render
        );
    }

    #[test]
    fn wrong_role_redirects_home() {
        for role in Role::ALL {
            for required in required_sets() {
                if required.is_public() || required.contains(role) {
                    continue;
                }
                assert_eq!(
                    decide(&authenticated(role), &required, "/x"),
                    Decision::RedirectHome,
                    "{role} on {:?}",
                    required.roles()
                );
            }
        }
    }

    #[test]
    fn admitted_role_renders() {
        assert_eq!(
            decide(
                &authenticated(Role::Lawyer),
                &RoleSet::of(&[Role::Client, Role::Lawyer]),
                "/caso/3"
            ),
            Decision::Render
        );
    }

    #[test]
    fn authenticating_is_pending_for_every_route() {
        let sessions = [
            SessionSnapshot::authenticating(identity()),
            SessionSnapshot::unhydrated(),
        ];
        for session in &sessions {
            for required in required_sets() {
                assert_eq!(decide(session, &required, "/any"), Decision::Pending);
            }
        }
    }

    #[test]
    fn redirect_login_location_encodes_return_path() {
        let decision = Decision::RedirectLogin {
            return_to: "/abogado/casos?page=2".to_string(),
        };
        assert_eq!(
            decision.location(&RoutePaths::default()),
            Some("/login?next=%2Fabogado%2Fcasos%3Fpage%3D2".to_string())
        );
        assert_eq!(
            Decision::RedirectHome.location(&RoutePaths::default()),
            Some("/".to_string())
        );
        assert_eq!(Decision::Pending.location(&RoutePaths::default()), None);
    }

    #[test]
    fn landing_path_prefers_recorded_destination() {
        let paths = RoutePaths::default();
        let session = authenticated(Role::Client);
        assert_eq!(
            landing_path(Some("/cliente/facturas/9"), &session, &paths),
            "/cliente/facturas/9"
        );
    }

    #[test]
    fn landing_path_rejects_foreign_or_looping_destinations() {
        let paths = RoutePaths::default();
        let session = authenticated(Role::Lawyer);
        for next in [
            "https://evil.example",
            "//evil.example",
            "/\\evil.example",
            "/login",
            "/login?next=%2F",
            "",
        ] {
            assert_eq!(
                landing_path(Some(next), &session, &paths),
                "/abogado/casos",
                "{next}"
            );
        }
    }

    #[test]
    fn landing_path_defaults_per_role() {
        let paths = RoutePaths::default();
        assert_eq!(
            landing_path(None, &authenticated(Role::Admin), &paths),
            "/admin/crear-abogado"
        );
        assert_eq!(
            landing_path(None, &SessionSnapshot::anonymous(), &paths),
            "/"
        );
    }
}
