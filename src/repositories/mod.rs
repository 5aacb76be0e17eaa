//! Repository layer for data access operations.
//!
//! Vehicles are held in memory; see [`VehicleRepository`].

mod vehicle_repo;

pub use vehicle_repo::VehicleRepository;

/// Aggregates all repositories for convenient access.
///
/// Repositories share their storage through `Arc`, so cloning is cheap.
#[derive(Clone, Default)]
pub struct Repositories {
    pub vehicles: VehicleRepository,
}

impl Repositories {
    pub fn new() -> Self {
        Self::default()
    }
}
