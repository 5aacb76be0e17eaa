//! Application state for Axum web framework.

use crate::repositories::Repositories;
use crate::services::Services;

/// Shared services, handed to every handler through Axum's `State` extractor.
///
/// Cloning is cheap since services are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    /// Builds the default services over the given repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
        }
    }

    pub fn from_services(services: Services) -> Self {
        Self { services }
    }
}
