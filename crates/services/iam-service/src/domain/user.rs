//! User aggregate root.

use std::collections::HashSet;

use domain::{
    AuditFields, DomainError, DomainResult, HashedPassword, MAX_USERNAME_LENGTH,
    MAX_USER_PASSWORD_LENGTH,
};

use super::role::{Role, Roles};

/// Credential holder with a role set and an optional profile link.
///
/// The aggregate never hashes; it receives an already-hashed password.
#[derive(Debug, Clone)]
pub struct User {
    id: Option<i64>,
    username: String,
    password: HashedPassword,
    roles: HashSet<Role>,
    profile_id: Option<i64>,
    audit: AuditFields,
}

impl User {
    /// # Errors
    /// Validation error for a blank or oversized username or password.
    pub fn new(username: &str, password: HashedPassword) -> DomainResult<Self> {
        Self::with_roles_and_profile(username, password, None, None)
    }

    pub fn with_roles(
        username: &str,
        password: HashedPassword,
        roles: Option<Vec<Role>>,
    ) -> DomainResult<Self> {
        Self::with_roles_and_profile(username, password, roles, None)
    }

    pub fn with_profile(
        username: &str,
        password: HashedPassword,
        profile_id: i64,
    ) -> DomainResult<Self> {
        Self::with_roles_and_profile(username, password, None, Some(profile_id))
    }

    pub fn with_roles_and_profile(
        username: &str,
        password: HashedPassword,
        roles: Option<Vec<Role>>,
        profile_id: Option<i64>,
    ) -> DomainResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::validation("Username cannot be blank"));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Username cannot exceed {} characters",
                MAX_USERNAME_LENGTH
            )));
        }
        if password.as_str().trim().is_empty() {
            return Err(DomainError::validation("Password cannot be blank"));
        }
        if password.as_str().len() > MAX_USER_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password cannot exceed {} characters",
                MAX_USER_PASSWORD_LENGTH
            )));
        }

        let mut user = Self {
            id: None,
            username: username.to_string(),
            password,
            roles: HashSet::new(),
            profile_id,
            audit: AuditFields::now(),
        };
        user.add_roles(roles);
        Ok(user)
    }

    /// Rebuild a stored user without re-running creation rules.
    pub fn restore(
        id: i64,
        username: String,
        password: HashedPassword,
        roles: Vec<Role>,
        profile_id: Option<i64>,
        audit: AuditFields,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            password,
            roles: roles.into_iter().collect(),
            profile_id,
            audit,
        }
    }

    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.insert(role);
        self
    }

    pub fn add_roles(&mut self, roles: Option<Vec<Role>>) -> &mut Self {
        self.roles.extend(Role::validate_role_set(roles));
        self
    }

    pub fn set_profile(&mut self, profile_id: Option<i64>) -> &mut Self {
        self.profile_id = profile_id;
        self
    }

    /// Attach the store-assigned identity.
    pub fn with_id(mut self, id: i64, audit: AuditFields) -> Self {
        self.id = Some(id);
        self.audit = audit;
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    pub fn profile_id(&self) -> Option<i64> {
        self.profile_id
    }

    pub fn audit(&self) -> &AuditFields {
        &self.audit
    }

    pub fn has_role(&self, role: Roles) -> bool {
        self.roles.iter().any(|r| r.name() == role)
    }

    /// Role tags in a stable order.
    pub fn role_names(&self) -> Vec<String> {
        let mut names: Vec<Roles> = self.roles.iter().map(Role::name).collect();
        names.sort();
        names.into_iter().map(|r| r.as_str().to_string()).collect()
    }

    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password.verify(plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashed() -> HashedPassword {
        HashedPassword::from_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA")
    }

    #[test]
    fn test_absent_role_list_gives_empty_set() {
        let user = User::with_roles("carla", hashed(), None).unwrap();
        assert!(user.roles().is_empty());
        assert_eq!(user.id(), None);
        assert_eq!(user.profile_id(), None);
    }

    #[test]
    fn test_add_role_is_idempotent() {
        let mut user = User::new("carla", hashed()).unwrap();
        user.add_role(Role::new(Roles::RoleAdmin))
            .add_role(Role::with_id(3, Roles::RoleAdmin));

        assert_eq!(user.roles().len(), 1);
        assert!(user.has_role(Roles::RoleAdmin));
    }

    #[test]
    fn test_add_roles_ignores_absent_list() {
        let mut user = User::with_roles("carla", hashed(), Some(vec![Role::get_default_role()]))
            .unwrap();
        user.add_roles(None).add_roles(Some(vec![]));
        assert_eq!(user.role_names(), vec!["ROLE_ISSUER"]);

        user.add_roles(Some(vec![Role::new(Roles::RoleInvestor)]));
        assert_eq!(user.role_names(), vec!["ROLE_ISSUER", "ROLE_INVESTOR"]);
    }

    #[test]
    fn test_set_profile_replaces_link() {
        let mut user = User::with_profile("carla", hashed(), 4).unwrap();
        assert_eq!(user.profile_id(), Some(4));

        user.set_profile(Some(9));
        assert_eq!(user.profile_id(), Some(9));
        user.set_profile(None);
        assert_eq!(user.profile_id(), None);
    }

    #[test]
    fn test_username_rules() {
        assert!(User::new("   ", hashed()).is_err());
        assert!(User::new(&"u".repeat(51), hashed()).is_err());
        assert!(User::new(&"u".repeat(50), hashed()).is_ok());
        assert_eq!(User::new("  carla ", hashed()).unwrap().username(), "carla");
    }

    #[test]
    fn test_password_rules() {
        assert!(User::new("carla", HashedPassword::from_hash("")).is_err());
        assert!(User::new("carla", HashedPassword::from_hash("x".repeat(121))).is_err());
    }
}
