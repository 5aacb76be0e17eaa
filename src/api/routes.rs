//! Router configuration for the API.
//!
//! This module provides centralized route registration, middleware
//! configuration and the OpenAPI document built from the registered routes.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer};
use utoipa::OpenApi;
use utoipa::openapi::server::ServerBuilder;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::config::Settings;
use crate::state::AppState;

/// Resource routes, relative to `server.base_path`.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/vehicles", handlers::vehicles::vehicle_routes())
}

/// OpenAPI document describing every registered route.
///
/// Paths are relative to the single server entry, which is `base_path`.
pub fn openapi_document(settings: &Settings) -> utoipa::openapi::OpenApi {
    let (_, openapi) = api_router().split_for_parts();
    with_runtime_info(openapi, settings)
}

fn with_runtime_info(
    mut openapi: utoipa::openapi::OpenApi,
    settings: &Settings,
) -> utoipa::openapi::OpenApi {
    let base_path = match settings.server.base_path.as_str() {
        "" => "/",
        path => path,
    };

    openapi.info.version = settings.application.version.clone();
    openapi.servers = Some(vec![
        ServerBuilder::new()
            .url(base_path)
            .description(Some(settings.application.name.clone()))
            .build(),
    ]);
    openapi
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Layers added last run first:
/// 1. Request ID - generates/propagates request IDs
/// 2. Logging - logs requests with request IDs
/// 3. CORS (permissive)
/// 4. Response compression
/// 5. Request timeout (`server.request_timeout`)
///
/// # Routes
/// - `{base_path}/vehicles` - Vehicle operations
/// - `openapi.swagger_path` and `openapi.spec_path` when `openapi.enabled`,
///   never under `base_path`
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let (api, openapi) = api_router().split_for_parts();

    let router = match settings.server.base_path.as_str() {
        "" => api,
        base_path => Router::new().nest(base_path, api),
    };

    let router = if settings.openapi.enabled {
        router.merge(
            SwaggerUi::new(settings.openapi.swagger_path.clone()).url(
                settings.openapi.spec_path.clone(),
                with_runtime_info(openapi, settings),
            ),
        )
    } else {
        router
    };

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(settings.server.request_timeout),
        ))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
