//! Repository layer for profile persistence.

pub mod entities;
mod profile_repository;

pub use profile_repository::{ProfileRepository, ProfileStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
