pub mod migrations;

pub use migrations::migrations;
