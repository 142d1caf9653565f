//! Profiles bounded context.
//!
//! Company/tenant profiles keyed by RUC and email. Other contexts reach
//! this one only through [`ProfilesContextFacade`], which speaks in
//! primitives and never leaks the value objects.

pub mod domain;
pub mod facade;
pub mod infra;
pub mod repository;
pub mod rest;
pub mod service;

pub use facade::{ProfilesContextFacade, ProfilesFacade};
pub use service::{
    ProfileCommandService, ProfileCommandServiceImpl, ProfileQueryService,
    ProfileQueryServiceImpl,
};
