//! Infrastructure layer - schema migrations owned by this context.

pub mod migrations;

pub use migrations::migrations;
