//! Service layer for business logic operations.
//!
//! Handlers talk to services through capability traits so the storage
//! behind them can be swapped (tests use scripted fakes).

mod error;
mod seed;
mod vehicle_service;

pub use error::{ServiceError, ServiceResult};
pub use seed::seed_vehicles;
pub use vehicle_service::{DefaultVehicleService, VehicleService};

use std::sync::Arc;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Held in the Axum application state; cloning only bumps reference counts.
#[derive(Clone)]
pub struct Services {
    pub vehicles: Arc<dyn VehicleService>,
}

impl Services {
    /// Creates the default services from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            vehicles: Arc::new(DefaultVehicleService::new(repos.vehicles)),
        }
    }

    /// Uses the given vehicle service instead of the in-memory default.
    pub fn with_vehicle_service(vehicles: Arc<dyn VehicleService>) -> Self {
        Self { vehicles }
    }
}
