//! HTTP request handlers for API endpoints.
//!
//! Handlers are organized by resource type.

pub mod vehicles;
