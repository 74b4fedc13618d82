/// Module containing environment configuration helpers
pub mod config;
/// Module containing generators for opaque identifiers and state values
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
