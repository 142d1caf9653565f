//! Identity & Access Management bounded context.
//!
//! Users, their role set and the credentials used to sign in. A user may
//! link to a company profile, which lives in the profiles context and is
//! reached only through [`acl::ExternalProfileService`].

pub mod acl;
pub mod domain;
pub mod infra;
pub mod repository;
pub mod rest;
pub mod service;

pub use acl::{ExternalProfileService, ExternalProfileServiceImpl};
pub use service::{
    Claims, JwtTokenService, RoleCommandService, RoleCommandServiceImpl, RoleQueryService,
    RoleQueryServiceImpl, TokenService, UserCommandService, UserCommandServiceImpl,
    UserQueryService, UserQueryServiceImpl,
};
