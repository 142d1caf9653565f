//! Infrastructure shared by both contexts.

pub mod db;
pub mod migrator;

pub use db::{Database, HealthProbe};
pub use migrator::Migrator;
