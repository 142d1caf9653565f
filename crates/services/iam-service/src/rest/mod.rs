//! Wire contract of the IAM context.

pub mod assemblers;
pub mod resources;

pub use assemblers::{
    AuthenticatedUserResourceFromEntityAssembler, RoleResourceFromEntityAssembler,
    SignInCommandFromResourceAssembler, SignUpCommandFromResourceAssembler,
    UserResourceFromEntityAssembler,
};
pub use resources::{
    AuthenticatedUserResource, RoleResource, SignInResource, SignUpProfileResource,
    SignUpResource, UserResource,
};
