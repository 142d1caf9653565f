//! Role tags and the role entity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use domain::{DomainError, DomainResult};

/// Fixed set of permission tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Roles {
    RoleIssuer,
    RoleInvestor,
    RoleAdmin,
}

impl Roles {
    pub const ALL: [Roles; 3] = [Roles::RoleIssuer, Roles::RoleInvestor, Roles::RoleAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Roles::RoleIssuer => "ROLE_ISSUER",
            Roles::RoleInvestor => "ROLE_INVESTOR",
            Roles::RoleAdmin => "ROLE_ADMIN",
        }
    }

    /// Exact-match lookup of a role tag.
    ///
    /// # Errors
    /// Validation error when `name` is not one of the known tags.
    pub fn value_of(name: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == name)
            .ok_or_else(|| DomainError::validation(format!("Unknown role: {}", name)))
    }

    /// Whether a caller may request this tag for their own account.
    pub fn is_self_assignable(&self) -> bool {
        !matches!(self, Roles::RoleAdmin)
    }
}

impl FromStr for Roles {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_of(s)
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seeded role row. Two roles are the same role when their names match.
#[derive(Debug, Clone, Copy)]
pub struct Role {
    id: Option<i64>,
    name: Roles,
}

impl Role {
    pub fn new(name: Roles) -> Self {
        Self { id: None, name }
    }

    pub fn with_id(id: i64, name: Roles) -> Self {
        Self { id: Some(id), name }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> Roles {
        self.name
    }

    pub fn string_name(&self) -> &'static str {
        self.name.as_str()
    }

    pub fn default_role_name() -> Roles {
        Roles::RoleIssuer
    }

    pub fn get_default_role() -> Self {
        Self::new(Self::default_role_name())
    }

    /// Lenient parse: absent, blank or unknown names give the default role.
    pub fn to_role_name_from_string(name: Option<&str>) -> Roles {
        name.map(str::trim)
            .filter(|n| !n.is_empty())
            .and_then(|n| Roles::value_of(n).ok())
            .unwrap_or_else(Self::default_role_name)
    }

    /// An absent list becomes empty; anything else passes through as-is.
    pub fn validate_role_set(roles: Option<Vec<Role>>) -> Vec<Role> {
        roles.unwrap_or_default()
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_is_exact() {
        assert_eq!(Roles::value_of("ROLE_ADMIN").unwrap(), Roles::RoleAdmin);
        assert!(Roles::value_of("role_admin").is_err());
        assert!(Roles::value_of(" ROLE_ADMIN").is_err());
        assert_eq!("ROLE_INVESTOR".parse::<Roles>().unwrap(), Roles::RoleInvestor);
    }

    #[test]
    fn test_only_admin_is_not_self_assignable() {
        assert!(Roles::RoleIssuer.is_self_assignable());
        assert!(Roles::RoleInvestor.is_self_assignable());
        assert!(!Roles::RoleAdmin.is_self_assignable());
    }

    #[test]
    fn test_lenient_parse_falls_back_to_default() {
        assert_eq!(Role::to_role_name_from_string(None), Roles::RoleIssuer);
        assert_eq!(Role::to_role_name_from_string(Some("  ")), Roles::RoleIssuer);
        assert_eq!(Role::to_role_name_from_string(Some("NOT_A_ROLE")), Roles::RoleIssuer);
        assert_eq!(
            Role::to_role_name_from_string(Some("ROLE_INVESTOR")),
            Roles::RoleInvestor
        );
    }

    #[test]
    fn test_validate_role_set() {
        assert!(Role::validate_role_set(None).is_empty());
        assert!(Role::validate_role_set(Some(vec![])).is_empty());

        let roles = vec![Role::new(Roles::RoleAdmin), Role::new(Roles::RoleInvestor)];
        assert_eq!(Role::validate_role_set(Some(roles.clone())), roles);
    }

    #[test]
    fn test_role_identity_is_its_name() {
        assert_eq!(Role::with_id(1, Roles::RoleAdmin), Role::new(Roles::RoleAdmin));
        assert_ne!(Role::new(Roles::RoleAdmin), Role::new(Roles::RoleIssuer));
        assert_eq!(Role::get_default_role().string_name(), "ROLE_ISSUER");
    }
}
