//! Role types for portal access control.
//!
//! Every account has exactly one role, resolved from the profile endpoint
//! after login. Routes declare the set of roles allowed to view them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal role of an authenticated account.
///
/// Wire names follow the backend account DTO (`"CLIENTE"`, `"ABOGADO"`,
/// `"ADMIN"`). English spellings are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A firm client who follows their own cases and invoices.
    #[serde(rename = "CLIENTE", alias = "CLIENT")]
    Client,
    /// A lawyer who creates and updates cases and invoices.
    #[serde(rename = "ABOGADO", alias = "LAWYER")]
    Lawyer,
    /// An administrator who manages lawyer accounts.
    #[serde(rename = "ADMIN", alias = "ADMINISTRADOR")]
    Admin,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Client, Role::Lawyer, Role::Admin];

    /// Returns the wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENTE",
            Self::Lawyer => "ABOGADO",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns a human readable label for the top bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "Cliente",
            Self::Lawyer => "Abogado",
            Self::Admin => "Administrador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError {
    /// The rejected role name.
    pub name: String,
}

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: '{}'", self.name)
    }
}

impl std::error::Error for UnknownRoleError {}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLIENTE" | "CLIENT" => Ok(Self::Client),
            "ABOGADO" | "LAWYER" => Ok(Self::Lawyer),
            "ADMIN" | "ADMINISTRADOR" => Ok(Self::Admin),
            _ => Err(UnknownRoleError {
                name: s.to_string(),
            }),
        }
    }
}

/// Set of roles permitted to view a route.
///
/// An empty set means the route is public.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// Creates an empty role set (public route).
    #[must_use]
    pub fn public() -> Self {
        Self { roles: Vec::new() }
    }

    /// Creates a role set admitting exactly one role.
    #[must_use]
    pub fn only(role: Role) -> Self {
        Self { roles: vec![role] }
    }

    /// Creates a role set from a list of roles, dropping duplicates.
    #[must_use]
    pub fn of(roles: &[Role]) -> Self {
        let mut set = Self::public();
        for role in roles {
            set = set.with(*role);
        }
        set
    }

    /// Adds a role to the set if not already present.
    #[must_use]
    pub fn with(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    /// Returns true if the route is public.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns true if the role is admitted.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns the roles as a slice.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_set_is_empty() {
        let roles = RoleSet::public();
        assert!(roles.is_public());
        assert!(roles.roles().is_empty());
        assert!(!roles.contains(Role::Admin));
    }

    #[test]
    fn of_drops_duplicates() {
        let roles = RoleSet::of(&[Role::Client, Role::Lawyer, Role::Client]);
        assert_eq!(roles.roles(), &[Role::Client, Role::Lawyer]);
        assert!(!roles.is_public());
    }

    #[test]
    fn only_admits_single_role() {
        let roles = RoleSet::only(Role::Lawyer);
        assert!(roles.contains(Role::Lawyer));
        assert!(!roles.contains(Role::Client));
        assert!(!roles.contains(Role::Admin));
    }

    #[test]
    fn role_wire_format_matches_backend() {
        let json = serde_json::to_string(&Role::Client).expect("serialize");
        assert_eq!(json, "\"CLIENTE\"");

        let json = serde_json::to_string(&Role::Lawyer).expect("serialize");
        assert_eq!(json, "\"ABOGADO\"");
    }

    #[test]
    fn role_accepts_english_aliases() {
        let role: Role = serde_json::from_str("\"LAWYER\"").expect("deserialize");
        assert_eq!(role, Role::Lawyer);

        let role: Role = serde_json::from_str("\"ADMINISTRADOR\"").expect("deserialize");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn role_from_str_is_case_insensitive() {
        assert_eq!("cliente".parse::<Role>(), Ok(Role::Client));
        assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
        assert!("superuser".parse::<Role>().is_err());
    }
}
