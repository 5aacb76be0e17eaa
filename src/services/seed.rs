//! Startup seeding of the vehicle store from a JSON file.

use std::path::Path;

use anyhow::Context;

use crate::models::Vehicle;
use crate::services::VehicleService;

/// Loads a JSON array of vehicles from `path` and creates each one through
/// `service`. Vehicles the service refuses are skipped.
///
/// Returns the number of vehicles created.
pub async fn seed_vehicles(service: &dyn VehicleService, path: &Path) -> anyhow::Result<usize> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let vehicles: Vec<Vehicle> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    let mut created = 0;
    for mut vehicle in vehicles {
        if service.create(&mut vehicle).await? {
            created += 1;
        } else {
            tracing::warn!(
                vehicle_id = ?vehicle.vehicle_id,
                license_plate = ?vehicle.license_plate,
                "Seed vehicle refused, skipping"
            );
        }
    }

    tracing::info!(created, path = %path.display(), "Vehicle store seeded");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::VehicleRepository;
    use crate::services::DefaultVehicleService;
    use tempfile::TempDir;

    fn write_seed(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("vehicles.json");
        std::fs::write(&path, content).expect("Failed to write seed file");
        (dir, path)
    }

    #[tokio::test]
    async fn test_seed_creates_vehicles_and_skips_refused() {
        let (_dir, path) = write_seed(
            r#"[
                {"vehicleId": 3, "brand": "Seat", "licensePlate": "1111-AAA"},
                {"brand": "Opel", "licensePlate": "2222-BBB"},
                {"brand": "Clone", "licensePlate": "1111-aaa"}
            ]"#,
        );
        let service = DefaultVehicleService::new(VehicleRepository::new());

        let created = seed_vehicles(&service, &path).await.expect("Should seed");

        assert_eq!(created, 2);
        let opel = service.find_by_id(4).await.unwrap().expect("Opel gets next id");
        assert_eq!(opel.brand.as_deref(), Some("Opel"));
    }

    #[tokio::test]
    async fn test_seed_rejects_malformed_file() {
        let (_dir, path) = write_seed("{ not json");
        let service = DefaultVehicleService::new(VehicleRepository::new());

        let err = seed_vehicles(&service, &path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse seed file"));
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let service = DefaultVehicleService::new(VehicleRepository::new());
        let result = seed_vehicles(&service, Path::new("/nonexistent/vehicles.json")).await;
        assert!(result.is_err());
    }
}
