//! BonoYa API server.
//!
//! Hosts the IAM and profiles contexts in one axum application and wires
//! them to a shared PostgreSQL pool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
