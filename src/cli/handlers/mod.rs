//! Command handlers for CLI operations
//!
//! Each handler owns the merged settings and runs one command.

pub mod openapi;
pub mod serve;

pub use openapi::OpenApiCommandHandler;
pub use serve::ServeCommandHandler;
