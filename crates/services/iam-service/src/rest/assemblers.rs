//! Stateless resource <-> domain mapping.

use domain::{DomainError, DomainResult, TOKEN_TYPE_BEARER};

use crate::domain::{Role, Roles, SignInCommand, SignUpCommand, SignUpProfile, User};

use super::resources::{
    AuthenticatedUserResource, RoleResource, SignInResource, SignUpResource, UserResource,
};

pub struct SignUpCommandFromResourceAssembler;

impl SignUpCommandFromResourceAssembler {
    /// Role names are parsed strictly. An unknown tag, or one a caller may not
    /// grant themselves, is a validation error.
    pub fn to_command_from_resource(resource: SignUpResource) -> DomainResult<SignUpCommand> {
        let roles = resource
            .roles
            .iter()
            .map(|name| {
                let role = Roles::value_of(name)?;
                if !role.is_self_assignable() {
                    return Err(DomainError::validation(format!(
                        "Role {} cannot be requested at sign-up",
                        role
                    )));
                }
                Ok(role)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(SignUpCommand {
            username: resource.username,
            password: resource.password,
            roles,
            profile: resource.profile.map(|p| SignUpProfile {
                ruc: p.ruc,
                razon_social: p.razon_social,
                email: p.email,
                nombre_contacto: p.nombre_contacto,
            }),
        })
    }
}

pub struct SignInCommandFromResourceAssembler;

impl SignInCommandFromResourceAssembler {
    pub fn to_command_from_resource(resource: SignInResource) -> SignInCommand {
        SignInCommand {
            username: resource.username,
            password: resource.password,
        }
    }
}

pub struct UserResourceFromEntityAssembler;

impl UserResourceFromEntityAssembler {
    pub fn to_resource_from_entity(entity: &User) -> UserResource {
        UserResource {
            id: entity.id(),
            username: entity.username().to_string(),
            roles: entity.role_names(),
            profile_id: entity.profile_id(),
        }
    }
}

pub struct AuthenticatedUserResourceFromEntityAssembler;

impl AuthenticatedUserResourceFromEntityAssembler {
    pub fn to_resource_from_entity(
        entity: &User,
        token: String,
        expires_in: i64,
    ) -> AuthenticatedUserResource {
        AuthenticatedUserResource {
            id: entity.id(),
            username: entity.username().to_string(),
            roles: entity.role_names(),
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}

pub struct RoleResourceFromEntityAssembler;

impl RoleResourceFromEntityAssembler {
    pub fn to_resource_from_entity(entity: &Role) -> RoleResource {
        RoleResource {
            id: entity.id(),
            name: entity.string_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AuditFields, HashedPassword};

    fn sign_up(roles: &[&str]) -> SignUpResource {
        SignUpResource {
            username: "carla".to_string(),
            password: "secret1".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            profile: None,
        }
    }

    #[test]
    fn test_sign_up_parses_roles_strictly() {
        let command = SignUpCommandFromResourceAssembler::to_command_from_resource(sign_up(&[
            "ROLE_INVESTOR",
            "ROLE_ISSUER",
        ]))
        .unwrap();
        assert_eq!(command.roles, vec![Roles::RoleInvestor, Roles::RoleIssuer]);

        let err = SignUpCommandFromResourceAssembler::to_command_from_resource(sign_up(&[
            "ROLE_INVESTOR",
            "ROLE_GOD",
        ]))
        .unwrap_err();
        assert_eq!(err, DomainError::validation("Unknown role: ROLE_GOD"));
    }

    #[test]
    fn test_sign_up_cannot_request_admin() {
        let err = SignUpCommandFromResourceAssembler::to_command_from_resource(sign_up(&[
            "ROLE_INVESTOR",
            "ROLE_ADMIN",
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Role ROLE_ADMIN cannot be requested at sign-up")
        );
    }

    #[test]
    fn test_sign_up_without_roles_leaves_default_to_service() {
        let command =
            SignUpCommandFromResourceAssembler::to_command_from_resource(sign_up(&[])).unwrap();
        assert!(command.roles.is_empty());
        assert!(command.profile.is_none());
    }

    #[test]
    fn test_roles_field_may_be_omitted() {
        let body = r#"{"username":"carla","password":"secret1"}"#;
        let resource: SignUpResource = serde_json::from_str(body).unwrap();
        assert!(resource.roles.is_empty());
    }

    #[test]
    fn test_user_resource_serializes_null_profile() {
        let user = User::restore(
            3,
            "carla".to_string(),
            HashedPassword::from_hash("$argon2id$stored"),
            vec![Role::with_id(1, Roles::RoleIssuer)],
            None,
            AuditFields::now(),
        );

        let json =
            serde_json::to_value(UserResourceFromEntityAssembler::to_resource_from_entity(&user))
                .unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["roles"][0], "ROLE_ISSUER");
        assert!(json.get("profileId").unwrap().is_null());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_authenticated_resource_carries_token() {
        let user = User::restore(
            3,
            "carla".to_string(),
            HashedPassword::from_hash("$argon2id$stored"),
            vec![],
            Some(8),
            AuditFields::now(),
        );

        let resource = AuthenticatedUserResourceFromEntityAssembler::to_resource_from_entity(
            &user,
            "jwt".to_string(),
            604_800,
        );
        assert_eq!(resource.token, "jwt");
        assert_eq!(resource.token_type, "Bearer");
        assert_eq!(resource.expires_in, 604_800);
    }
}
