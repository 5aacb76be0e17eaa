//! API module for HTTP handlers and middleware.
//!
//! This module provides the HTTP API layer for the application: request
//! handlers, middleware components and the OpenAPI description.

pub mod doc;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::{create_router, openapi_document};
