//! Declarative route table.
//!
//! Each declaration pairs a path pattern with the roles allowed to view it.
//! Patterns are static segments or `:name` parameters, e.g. `/caso/:id`.
//! Paths missing from the table are never rendered.

use crate::guard::{Decision, decide};
use crate::role::{Role, RoleSet};
use crate::session::SessionSnapshot;

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDeclaration {
    path: &'static str,
    required_roles: RoleSet,
    nav_label: Option<&'static str>,
}

impl RouteDeclaration {
    /// Declares a route anyone may view.
    #[must_use]
    pub fn public(path: &'static str) -> Self {
        Self {
            path,
            required_roles: RoleSet::public(),
            nav_label: None,
        }
    }

    /// Declares a route restricted to `roles`.
    #[must_use]
    pub fn protected(path: &'static str, roles: RoleSet) -> Self {
        Self {
            path,
            required_roles: roles,
            nav_label: None,
        }
    }

    /// Lists the route in the top bar under `label`.
    #[must_use]
    pub fn labelled(mut self, label: &'static str) -> Self {
        self.nav_label = Some(label);
        self
    }

    /// Returns the path pattern.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the roles allowed to view the route.
    #[must_use]
    pub fn required_roles(&self) -> &RoleSet {
        &self.required_roles
    }

    /// Returns the top bar label, if the route is listed there.
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        self.nav_label
    }

    /// Returns true if `path` matches this declaration's pattern.
    ///
    /// Query string and fragment are ignored, as is a trailing slash.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut actual = segments(path);
        let mut pattern = segments(self.path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(expected), Some(segment)) => {
                    if !expected.starts_with(':') && expected != segment {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Ordered list of route declarations. The first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDeclaration>,
}

impl RouteTable {
    /// Creates a table from declarations.
    #[must_use]
    pub fn new(routes: Vec<RouteDeclaration>) -> Self {
        Self { routes }
    }

    /// Returns the declaration matching `path`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteDeclaration> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Returns the roles required by `path`, or `None` if no route matches.
    #[must_use]
    pub fn required_roles(&self, path: &str) -> Option<&RoleSet> {
        self.lookup(path).map(|route| &route.required_roles)
    }

    /// Decides what `requested` shows for `session`.
    ///
    /// Public routes render even while the session resolves. Returns `None`
    /// when no route matches, so undeclared paths stay closed.
    #[must_use]
    pub fn authorize(&self, session: &SessionSnapshot, requested: &str) -> Option<Decision> {
        let roles = self.required_roles(requested)?;
        if roles.is_public() {
            return Some(Decision::Render);
        }
        Some(decide(session, roles, requested))
    }

    /// Returns the labelled routes a role can open from the top bar.
    pub fn nav_for(&self, role: Role) -> impl Iterator<Item = &RouteDeclaration> {
        self.routes.iter().filter(move |route| {
            route.nav_label.is_some()
                && !route.required_roles.is_public()
                && route.required_roles.contains(role)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use case_portal_core::Identity;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteDeclaration::public("/"),
            RouteDeclaration::public("/login"),
            RouteDeclaration::protected("/cliente/casos", RoleSet::only(Role::Client))
                .labelled("Mis casos"),
            RouteDeclaration::protected("/abogado/casos/:id", RoleSet::only(Role::Lawyer)),
            RouteDeclaration::protected("/abogado/casos", RoleSet::only(Role::Lawyer))
                .labelled("Casos"),
            RouteDeclaration::protected(
                "/caso/:id",
                RoleSet::of(&[Role::Client, Role::Lawyer]),
            ),
        ])
    }

    #[test]
    fn static_paths_match_exactly() {
        let table = table();
        assert_eq!(table.lookup("/").map(RouteDeclaration::path), Some("/"));
        assert_eq!(
            table.lookup("/cliente/casos").map(RouteDeclaration::path),
            Some("/cliente/casos")
        );
        assert!(table.lookup("/cliente").is_none());
        assert!(table.lookup("/cliente/casos/extra").is_none());
    }

    #[test]
    fn params_match_any_segment() {
        let table = table();
        assert_eq!(
            table.lookup("/caso/42").map(RouteDeclaration::path),
            Some("/caso/:id")
        );
        assert_eq!(
            table.lookup("/abogado/casos/7").map(RouteDeclaration::path),
            Some("/abogado/casos/:id")
        );
        assert!(table.lookup("/caso").is_none());
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        let table = table();
        assert_eq!(
            table.lookup("/abogado/casos/?page=2#top").map(RouteDeclaration::path),
            Some("/abogado/casos")
        );
    }

    #[test]
    fn unknown_paths_declare_no_roles() {
        let table = table();
        assert!(table.required_roles("/no-existe").is_none());
        assert!(
            table
                .required_roles("/caso/9")
                .is_some_and(|roles| roles.contains(Role::Client))
        );
    }

    #[test]
    fn unknown_paths_are_never_authorized() {
        let table = table();
        let lawyer = SessionSnapshot::authenticated(
            Identity::new("abogado@ley.co").expect("identity"),
            Profile::new(Role::Lawyer),
        );
        assert_eq!(table.authorize(&lawyer, "/abogado/caso"), None);
        assert_eq!(table.authorize(&SessionSnapshot::anonymous(), "/admin"), None);
    }

    #[test]
    fn public_routes_render_while_session_resolves() {
        let table = table();
        let resolving = SessionSnapshot::unhydrated();
        assert_eq!(table.authorize(&resolving, "/login?next=%2F"), Some(Decision::Render));
        assert_eq!(
            table.authorize(&resolving, "/cliente/casos"),
            Some(Decision::Pending)
        );
    }

    #[test]
    fn protected_routes_use_the_guard() {
        let table = table();
        assert_eq!(
            table.authorize(&SessionSnapshot::anonymous(), "/caso/4?tab=docs"),
            Some(Decision::RedirectLogin {
                return_to: "/caso/4?tab=docs".to_string()
            })
        );
        let client = SessionSnapshot::authenticated(
            Identity::new("cliente@ley.co").expect("identity"),
            Profile::new(Role::Client),
        );
        assert_eq!(table.authorize(&client, "/caso/4"), Some(Decision::Render));
        assert_eq!(
            table.authorize(&client, "/abogado/casos"),
            Some(Decision::RedirectHome)
        );
    }

    #[test]
    fn nav_lists_labelled_routes_for_role() {
        let table = table();
        let labels: Vec<_> = table
            .nav_for(Role::Lawyer)
            .filter_map(RouteDeclaration::nav_label)
            .collect();
        assert_eq!(labels, vec!["Casos"]);
        assert_eq!(table.nav_for(Role::Admin).count(), 0);
    }
}
