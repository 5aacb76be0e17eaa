//! Vehicle service capability and its in-memory implementation.

use async_trait::async_trait;
use tokio::sync::Mutex;
use validator::Validate;

use crate::models::{Results, Vehicle, VehicleCriteria};
use crate::repositories::VehicleRepository;
use crate::services::error::{ServiceError, ServiceResult};

/// Persistence and business operations over vehicles.
///
/// Implementations must be safe for concurrent calls; the HTTP layer shares a
/// single instance across all requests.
#[async_trait]
pub trait VehicleService: Send + Sync {
    /// All vehicles. `None` and an empty list are both "nothing to show".
    async fn find_all(&self) -> ServiceResult<Option<Vec<Vehicle>>>;

    async fn find_by_id(&self, id: i32) -> ServiceResult<Option<Vehicle>>;

    /// Stores a new vehicle and back-fills `vehicle_id` when it was absent.
    ///
    /// Returns `false` when the vehicle was refused.
    async fn create(&self, vehicle: &mut Vehicle) -> ServiceResult<bool>;

    /// Replaces the vehicle identified by `vehicle.vehicle_id`.
    ///
    /// Returns `false` when nothing was updated.
    async fn update(&self, vehicle: &Vehicle) -> ServiceResult<bool>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i32) -> ServiceResult<bool>;

    async fn find_by_criteria(
        &self,
        criteria: &VehicleCriteria,
    ) -> ServiceResult<Option<Results<Vehicle>>>;
}

/// [`VehicleService`] over the in-memory [`VehicleRepository`].
///
/// License plates are unique among stored vehicles (case-insensitive).
/// Writes are serialized so uniqueness checks and inserts cannot interleave.
pub struct DefaultVehicleService {
    repo: VehicleRepository,
    write_lock: Mutex<()>,
}

impl DefaultVehicleService {
    pub fn new(repo: VehicleRepository) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl VehicleService for DefaultVehicleService {
    async fn find_all(&self) -> ServiceResult<Option<Vec<Vehicle>>> {
        Ok(Some(self.repo.list_all()))
    }

    async fn find_by_id(&self, id: i32) -> ServiceResult<Option<Vehicle>> {
        Ok(self.repo.find_by_id(id))
    }

    async fn create(&self, vehicle: &mut Vehicle) -> ServiceResult<bool> {
        let _guard = self.write_lock.lock().await;

        if vehicle.vehicle_id.is_some_and(|id| self.repo.contains(id)) {
            return Ok(false);
        }
        if vehicle
            .plate()
            .is_some_and(|plate| self.repo.exists_license_plate(plate, None))
        {
            return Ok(false);
        }

        let id = match vehicle.vehicle_id {
            Some(id) => id,
            None => self.repo.next_id().ok_or_else(|| {
                ServiceError::Storage("No vehicle identifiers left to assign".to_string())
            })?,
        };

        vehicle.vehicle_id = Some(id);
        self.repo.insert(id, vehicle.clone());
        Ok(true)
    }

    async fn update(&self, vehicle: &Vehicle) -> ServiceResult<bool> {
        let Some(id) = vehicle.vehicle_id else {
            return Ok(false);
        };

        let _guard = self.write_lock.lock().await;

        if !self.repo.contains(id) {
            return Ok(false);
        }
        if vehicle
            .plate()
            .is_some_and(|plate| self.repo.exists_license_plate(plate, Some(id)))
        {
            return Ok(false);
        }

        Ok(self.repo.update(id, vehicle.clone()))
    }

    async fn delete(&self, id: i32) -> ServiceResult<bool> {
        let _guard = self.write_lock.lock().await;
        Ok(self.repo.delete(id))
    }

    async fn find_by_criteria(
        &self,
        criteria: &VehicleCriteria,
    ) -> ServiceResult<Option<Results<Vehicle>>> {
        criteria.validate()?;

        let matching: Vec<Vehicle> = self
            .repo
            .list_all()
            .into_iter()
            .filter(|vehicle| criteria.matches(vehicle))
            .collect();

        let page_number = criteria.effective_page_number();
        let page_size = criteria.effective_page_size();
        let total_records = matching.len() as u64;
        let skip = (page_number as usize - 1).saturating_mul(page_size as usize);

        let page = matching
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Ok(Some(Results::new(page, total_records, page_number, page_size)))
    }
}
