//! Common utilities shared across the bounded contexts and the gateway.
//!
//! This crate provides:
//! - Unified error handling with HTTP conversion
//! - Configuration structures
//! - Tracing initialization

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
