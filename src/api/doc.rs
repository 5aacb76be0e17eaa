use utoipa::OpenApi;

pub const VEHICLE_TAG: &str = "Vehicles";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RentExpress API",
        description = "REST API for the RentExpress vehicle fleet",
        contact(name = "API Support", email = "support@restapi.local", url = "https://restapi.local"),
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    tags(
        (name = VEHICLE_TAG, description = "Vehicle management endpoints"),
    )
)]
pub struct ApiDoc;
