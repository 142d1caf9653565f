//! IAM commands.

use std::fmt;

use super::role::Roles;

/// Company data for the profile created alongside a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpProfile {
    pub ruc: String,
    pub razon_social: String,
    pub email: String,
    pub nombre_contacto: Option<String>,
}

/// Register a user. An empty `roles` list means the default role.
///
/// When `profile` is present the profile is created with the same password
/// and linked to the user.
#[derive(Clone)]
pub struct SignUpCommand {
    pub username: String,
    pub password: String,
    pub roles: Vec<Roles>,
    pub profile: Option<SignUpProfile>,
}

impl fmt::Debug for SignUpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("roles", &self.roles)
            .field("profile", &self.profile)
            .finish()
    }
}

#[derive(Clone)]
pub struct SignInCommand {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SignInCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Insert every role tag that has no row yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedRolesCommand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_passwords() {
        let sign_up = SignUpCommand {
            username: "carla".to_string(),
            password: "hunter22".to_string(),
            roles: vec![Roles::RoleInvestor],
            profile: None,
        };
        let sign_in = SignInCommand {
            username: "carla".to_string(),
            password: "hunter22".to_string(),
        };

        let debug = format!("{:?} {:?}", sign_up, sign_in);
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("carla"));
    }
}
