//! Outbound adapters to other bounded contexts.

mod external_profile_service;

pub use external_profile_service::{ExternalProfileService, ExternalProfileServiceImpl};

#[cfg(any(test, feature = "test-utils"))]
pub use external_profile_service::MockExternalProfileService;
