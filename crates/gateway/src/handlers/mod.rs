//! HTTP handlers, one module per resource.

pub mod authentication_handler;
pub mod health_handler;
pub mod profile_handler;
pub mod role_handler;
pub mod user_handler;

pub use authentication_handler::authentication_routes;
pub use health_handler::health_check;
pub use profile_handler::profile_routes;
pub use role_handler::role_routes;
pub use user_handler::user_routes;
