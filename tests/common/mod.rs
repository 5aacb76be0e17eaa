//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rentexpress_api::AppState;
use rentexpress_api::api::create_router;
use rentexpress_api::config::Settings;
use rentexpress_api::models::{Results, Vehicle, VehicleCriteria};
use rentexpress_api::services::{ServiceError, ServiceResult, Services, VehicleService};

/// Scriptable [`VehicleService`] that counts every call it receives.
#[derive(Default)]
pub struct FakeVehicleService {
    store: Mutex<BTreeMap<i32, Vehicle>>,
    failure: Option<String>,
    /// Calls that succeed before `failure` kicks in
    healthy_calls: usize,
    assign_id: Option<i32>,
    null_collections: bool,
    refuse_writes: bool,
    forget_writes: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeVehicleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let service = Self::new();
        {
            let mut store = service.store.lock().unwrap();
            for vehicle in vehicles {
                let id = vehicle.vehicle_id.expect("fixture vehicles carry ids");
                store.insert(id, vehicle);
            }
        }
        service
    }

    /// Every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// The first `healthy_calls` calls succeed, every later one fails with
    /// `message`
    pub fn failing_after(healthy_calls: usize, message: &str) -> Self {
        Self {
            healthy_calls,
            ..Self::failing(message)
        }
    }

    /// `create` back-fills `id` on vehicles without one
    pub fn assigning_id(mut self, id: i32) -> Self {
        self.assign_id = Some(id);
        self
    }

    /// `find_all` and `find_by_criteria` answer `None`
    pub fn returning_null_collections(mut self) -> Self {
        self.null_collections = true;
        self
    }

    /// `create` and `update` answer `false`
    pub fn refusing_writes(mut self) -> Self {
        self.refuse_writes = true;
        self
    }

    /// `create` and `update` answer `true` without storing anything
    pub fn forgetting_writes(mut self) -> Self {
        self.forget_writes = true;
        self
    }

    /// Every call sleeps for `delay` before answering
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: i32) -> Option<Vehicle> {
        self.store.lock().unwrap().get(&id).cloned()
    }

    async fn enter(&self) -> ServiceResult<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(message) if call >= self.healthy_calls => {
                Err(ServiceError::Unavailable(message.clone()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl VehicleService for FakeVehicleService {
    async fn find_all(&self) -> ServiceResult<Option<Vec<Vehicle>>> {
        self.enter().await?;
        if self.null_collections {
            return Ok(None);
        }
        Ok(Some(self.store.lock().unwrap().values().cloned().collect()))
    }

    async fn find_by_id(&self, id: i32) -> ServiceResult<Option<Vehicle>> {
        self.enter().await?;
        Ok(self.stored(id))
    }

    async fn create(&self, vehicle: &mut Vehicle) -> ServiceResult<bool> {
        self.enter().await?;
        if self.refuse_writes {
            return Ok(false);
        }
        if vehicle.vehicle_id.is_none() {
            vehicle.vehicle_id = self.assign_id;
        }
        if self.forget_writes {
            return Ok(true);
        }
        if let Some(id) = vehicle.vehicle_id {
            self.store.lock().unwrap().insert(id, vehicle.clone());
        }
        Ok(true)
    }

    async fn update(&self, vehicle: &Vehicle) -> ServiceResult<bool> {
        self.enter().await?;
        if self.refuse_writes {
            return Ok(false);
        }
        if self.forget_writes {
            return Ok(true);
        }
        let mut store = self.store.lock().unwrap();
        match vehicle.vehicle_id.and_then(|id| store.get_mut(&id)) {
            Some(existing) => {
                *existing = vehicle.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> ServiceResult<bool> {
        self.enter().await?;
        Ok(self.store.lock().unwrap().remove(&id).is_some())
    }

    async fn find_by_criteria(
        &self,
        criteria: &VehicleCriteria,
    ) -> ServiceResult<Option<Results<Vehicle>>> {
        self.enter().await?;
        if self.null_collections {
            return Ok(None);
        }
        let matching: Vec<Vehicle> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|vehicle| criteria.matches(vehicle))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        Ok(Some(Results::new(matching, total, 1, 20)))
    }
}

pub fn vehicle(id: i32, brand: &str, plate: &str) -> Vehicle {
    Vehicle {
        vehicle_id: Some(id),
        brand: Some(brand.to_string()),
        model: Some("Base".to_string()),
        manufacture_year: Some(2020),
        daily_price: Some(45.0),
        license_plate: Some(plate.to_string()),
        current_mileage: Some(10_000),
        ..Default::default()
    }
}

pub fn app_with_settings(service: Arc<FakeVehicleService>, settings: &Settings) -> Router {
    let state = AppState::from_services(Services::with_vehicle_service(service));
    create_router(state, settings)
}

pub fn app(service: Arc<FakeVehicleService>) -> Router {
    app_with_settings(service, &Settings::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
