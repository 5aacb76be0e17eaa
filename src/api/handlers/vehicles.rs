//! Vehicle request handlers.
//!
//! Each handler checks that its required input is present, calls the
//! [`VehicleService`](crate::services::VehicleService) once or twice and maps
//! the outcome to a status code. Client errors and confirmations are plain
//! text; entities are JSON.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::VEHICLE_TAG;
use crate::error::{AppError, AppResult};
use crate::models::{Results, Vehicle, VehicleCriteria};
use crate::services::ServiceError;
use crate::state::AppState;
use crate::utils::OptionalJson;

const ID_REQUIRED: &str = "Vehicle ID is required";
const DATA_REQUIRED: &str = "Vehicle data is required";
const NOT_CREATED: &str = "Vehicle could not be created";
const ID_AND_DATA_REQUIRED: &str = "Vehicle ID and data are required";
const NOT_UPDATED: &str = "Vehicle not found or not updated";
const NOT_FOUND: &str = "Vehicle not found";
const DELETED: &str = "Vehicle deleted successfully";
const CRITERIA_REQUIRED: &str = "Search criteria is required";

/// Creates vehicle routes.
///
/// Routes:
/// - GET /          - List all vehicles
/// - POST /         - Create a vehicle
/// - PUT /          - Update the vehicle named by the payload's id
/// - GET /{id}      - Get vehicle by ID
/// - DELETE /{id}   - Delete vehicle by ID
/// - POST /search   - Search vehicles by criteria
pub fn vehicle_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_vehicles, create_vehicle, update_vehicle))
        .routes(routes!(get_vehicle, delete_vehicle))
        .routes(routes!(search_vehicles))
}

/// Parses the `{id}` path segment. Anything that is not an `i32` counts as
/// a missing identifier.
fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse().map_err(|_| AppError::bad_request(ID_REQUIRED))
}

fn log_failure(operation: &'static str) -> impl Fn(&ServiceError) {
    move |err| warn!(operation, error = %err, "Vehicle service call failed")
}

/// GET /vehicles - List all vehicles
#[utoipa::path(
    get,
    path = "/",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<Vehicle>),
        (status = 204, description = "No vehicles"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn list_vehicles(State(state): State<AppState>) -> AppResult<Response> {
    let vehicles = state
        .services
        .vehicles
        .find_all()
        .await
        .inspect_err(log_failure("find_all"))?;

    Ok(match vehicles {
        Some(vehicles) if !vehicles.is_empty() => Json(vehicles).into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /vehicles/{id} - Get vehicle by ID
///
/// An unknown id yields 404 with an empty body.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle found", body = Vehicle),
        (status = 400, description = "Missing or non-numeric ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vehicle>> {
    let id = parse_id(&id)?;

    state
        .services
        .vehicles
        .find_by_id(id)
        .await
        .inspect_err(log_failure("find_by_id"))?
        .map(Json)
        .ok_or_else(AppError::not_found_empty)
}

/// POST /vehicles - Create vehicle
///
/// Responds with the stored vehicle, re-read through the id the service
/// assigned. Falls back to echoing the input when there is nothing to re-read.
#[utoipa::path(
    post,
    path = "/",
    tag = VEHICLE_TAG,
    request_body = Vehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Missing payload or vehicle refused", body = String, content_type = "text/plain"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn create_vehicle(
    State(state): State<AppState>,
    OptionalJson(payload): OptionalJson<Vehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let Some(mut vehicle) = payload else {
        return Err(AppError::bad_request(DATA_REQUIRED));
    };

    let service = &state.services.vehicles;

    let created = service
        .create(&mut vehicle)
        .await
        .inspect_err(log_failure("create"))?;
    if !created {
        return Err(AppError::bad_request(NOT_CREATED));
    }

    let body = match vehicle.vehicle_id {
        Some(id) => service
            .find_by_id(id)
            .await
            .inspect_err(log_failure("find_by_id"))?
            .unwrap_or(vehicle),
        None => vehicle,
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /vehicles - Update vehicle
///
/// The payload must carry `vehicleId`.
#[utoipa::path(
    put,
    path = "/",
    tag = VEHICLE_TAG,
    request_body = Vehicle,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 400, description = "Missing payload or ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Vehicle not found or not updated", body = String, content_type = "text/plain"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn update_vehicle(
    State(state): State<AppState>,
    OptionalJson(payload): OptionalJson<Vehicle>,
) -> AppResult<Json<Vehicle>> {
    let Some((id, vehicle)) = payload.and_then(|v| v.vehicle_id.map(|id| (id, v))) else {
        return Err(AppError::bad_request(ID_AND_DATA_REQUIRED));
    };

    let service = &state.services.vehicles;

    let updated = service
        .update(&vehicle)
        .await
        .inspect_err(log_failure("update"))?;
    if !updated {
        return Err(AppError::not_found(NOT_UPDATED));
    }

    let current = service
        .find_by_id(id)
        .await
        .inspect_err(log_failure("find_by_id"))?;

    Ok(Json(current.unwrap_or(vehicle)))
}

/// DELETE /vehicles/{id} - Delete vehicle
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or non-numeric ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Vehicle not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, &'static str)> {
    let id = parse_id(&id)?;

    let deleted = state
        .services
        .vehicles
        .delete(id)
        .await
        .inspect_err(log_failure("delete"))?;

    if deleted {
        Ok((StatusCode::OK, DELETED))
    } else {
        Err(AppError::not_found(NOT_FOUND))
    }
}

/// POST /vehicles/search - Search vehicles by criteria
#[utoipa::path(
    post,
    path = "/search",
    tag = VEHICLE_TAG,
    request_body = VehicleCriteria,
    responses(
        (status = 200, description = "Matching vehicles", body = Results<Vehicle>),
        (status = 204, description = "No vehicle matches"),
        (status = 400, description = "Missing criteria", body = String, content_type = "text/plain"),
        (status = 500, description = "Service failure", body = String, content_type = "text/plain")
    )
)]
async fn search_vehicles(
    State(state): State<AppState>,
    OptionalJson(criteria): OptionalJson<VehicleCriteria>,
) -> AppResult<Response> {
    let Some(criteria) = criteria else {
        return Err(AppError::bad_request(CRITERIA_REQUIRED));
    };

    let results = state
        .services
        .vehicles
        .find_by_criteria(&criteria)
        .await
        .inspect_err(log_failure("find_by_criteria"))?;

    Ok(match results {
        Some(results) if !results.is_empty() => Json(results).into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    })
}
