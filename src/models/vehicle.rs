use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rental vehicle as exchanged with clients and stored by the service.
///
/// Only `vehicle_id` carries meaning for the HTTP layer; every other field
/// is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Assigned by the service on create when absent
    #[schema(example = 42)]
    pub vehicle_id: Option<i32>,

    #[schema(example = "Toyota")]
    pub brand: Option<String>,

    #[schema(example = "Corolla")]
    pub model: Option<String>,

    #[schema(example = 2021)]
    pub manufacture_year: Option<i32>,

    #[schema(example = 39.9)]
    pub daily_price: Option<f64>,

    #[schema(example = "1234-ABC")]
    pub license_plate: Option<String>,

    #[schema(example = "JTDBR32E720123456")]
    pub vin_number: Option<String>,

    #[schema(example = 48250)]
    pub current_mileage: Option<i32>,

    pub vehicle_status_id: Option<i32>,

    pub category_id: Option<i32>,

    pub headquarters_id: Option<i32>,
}

impl Vehicle {
    /// License plate, if present and not blank
    pub fn plate(&self) -> Option<&str> {
        self.license_plate
            .as_deref()
            .map(str::trim)
            .filter(|plate| !plate.is_empty())
    }
}

/// Case folding used wherever vehicle text is compared: plate uniqueness and
/// criteria substring matching.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}
