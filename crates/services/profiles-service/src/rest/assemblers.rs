//! Stateless resource <-> domain mapping.

use crate::domain::{CreateProfileCommand, Profile};

use super::resources::{CreateProfileResource, ProfileResource};

pub struct CreateProfileCommandFromResourceAssembler;

impl CreateProfileCommandFromResourceAssembler {
    pub fn to_command_from_resource(resource: CreateProfileResource) -> CreateProfileCommand {
        CreateProfileCommand {
            ruc: resource.ruc,
            razon_social: resource.razon_social,
            email: resource.email,
            password: resource.password,
            nombre_contacto: resource.nombre_contacto,
        }
    }
}

pub struct ProfileResourceFromEntityAssembler;

impl ProfileResourceFromEntityAssembler {
    pub fn to_resource_from_entity(entity: &Profile) -> ProfileResource {
        ProfileResource {
            id: entity.id(),
            ruc: entity.ruc().to_string(),
            razon_social: entity.razon_social().to_string(),
            email: entity.email().to_string(),
            nombre_contacto: entity.nombre_contacto().as_option().map(str::to_string),
            created_at: entity.audit().created_at,
            updated_at: entity.audit().updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AuditFields;

    use crate::domain::NewProfile;

    fn resource() -> CreateProfileResource {
        CreateProfileResource {
            ruc: "20123456789".to_string(),
            razon_social: "Acme Peru S.A.C.".to_string(),
            email: "finanzas@acme.pe".to_string(),
            password: "secret1".to_string(),
            nombre_contacto: None,
        }
    }

    #[test]
    fn test_resource_to_command_is_field_by_field() {
        let command = CreateProfileCommandFromResourceAssembler::to_command_from_resource(resource());
        assert_eq!(command.ruc, "20123456789");
        assert_eq!(command.razon_social, "Acme Peru S.A.C.");
        assert_eq!(command.email, "finanzas@acme.pe");
        assert_eq!(command.password, "secret1");
        assert_eq!(command.nombre_contacto, None);
    }

    #[test]
    fn test_entity_to_resource_serializes_nulls() {
        let command = CreateProfileCommandFromResourceAssembler::to_command_from_resource(resource());
        let profile = Profile::from_new(
            2,
            NewProfile::from_command(command).unwrap(),
            AuditFields::now(),
        );

        let resource = ProfileResourceFromEntityAssembler::to_resource_from_entity(&profile);
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["razonSocial"], "Acme Peru S.A.C.");
        assert!(json.get("nombreContacto").unwrap().is_null());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_unknown_request_fields_are_ignored() {
        let body = r#"{
            "ruc": "20123456789",
            "razonSocial": "Acme",
            "email": "finanzas@acme.pe",
            "password": "secret1",
            "nombreContacto": null,
            "sector": "mining"
        }"#;
        let parsed: CreateProfileResource = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.razon_social, "Acme");
    }
}
