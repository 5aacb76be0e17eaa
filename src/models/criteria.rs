//! Search criteria for vehicles.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{Vehicle, fold_case};

/// Page size used when the criteria do not name one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a single search may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Filter over vehicles. Every field is optional and absent fields match
/// everything; present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_bounds"))]
pub struct VehicleCriteria {
    pub vehicle_id: Option<i32>,

    /// Case-insensitive substring
    pub brand: Option<String>,

    /// Case-insensitive substring
    pub model: Option<String>,

    /// Case-insensitive substring
    pub license_plate: Option<String>,

    /// Case-insensitive substring
    pub vin_number: Option<String>,

    pub manufacture_year_from: Option<i32>,
    pub manufacture_year_to: Option<i32>,

    pub daily_price_min: Option<f64>,
    pub daily_price_max: Option<f64>,

    pub current_mileage_min: Option<i32>,
    pub current_mileage_max: Option<i32>,

    pub vehicle_status_id: Option<i32>,
    pub category_id: Option<i32>,
    pub headquarters_id: Option<i32>,

    /// 1-based page number, defaults to 1
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    #[schema(minimum = 1, example = 1)]
    pub page_number: Option<u32>,

    /// Defaults to 20
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[schema(minimum = 1, maximum = 100, example = 20)]
    pub page_size: Option<u32>,
}

impl VehicleCriteria {
    /// Whether `vehicle` satisfies every present filter
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        equals(self.vehicle_id, vehicle.vehicle_id)
            && equals(self.vehicle_status_id, vehicle.vehicle_status_id)
            && equals(self.category_id, vehicle.category_id)
            && equals(self.headquarters_id, vehicle.headquarters_id)
            && contains(&self.brand, &vehicle.brand)
            && contains(&self.model, &vehicle.model)
            && contains(&self.license_plate, &vehicle.license_plate)
            && contains(&self.vin_number, &vehicle.vin_number)
            && within(
                self.manufacture_year_from,
                self.manufacture_year_to,
                vehicle.manufacture_year,
            )
            && within(self.daily_price_min, self.daily_price_max, vehicle.daily_price)
            && within(
                self.current_mileage_min,
                self.current_mileage_max,
                vehicle.current_mileage,
            )
    }

    pub fn effective_page_number(&self) -> u32 {
        self.page_number.unwrap_or(1)
    }

    pub fn effective_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

fn equals(filter: Option<i32>, value: Option<i32>) -> bool {
    filter.is_none_or(|expected| value == Some(expected))
}

fn contains(filter: &Option<String>, value: &Option<String>) -> bool {
    let Some(needle) = filter.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    let needle = fold_case(needle);
    value
        .as_deref()
        .is_some_and(|haystack| fold_case(haystack).contains(&needle))
}

fn within<T: PartialOrd + Copy>(min: Option<T>, max: Option<T>, value: Option<T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

fn inverted<T: PartialOrd>(min: Option<T>, max: Option<T>) -> bool {
    matches!((min, max), (Some(min), Some(max)) if min > max)
}

fn validate_bounds(criteria: &VehicleCriteria) -> Result<(), ValidationError> {
    let inverted_field = if inverted(criteria.manufacture_year_from, criteria.manufacture_year_to) {
        Some("manufactureYear")
    } else if inverted(criteria.daily_price_min, criteria.daily_price_max) {
        Some("dailyPrice")
    } else if inverted(criteria.current_mileage_min, criteria.current_mileage_max) {
        Some("currentMileage")
    } else {
        None
    };

    match inverted_field {
        Some(field) => Err(ValidationError::new("inverted_range").with_message(Cow::Owned(
            format!("Lower bound of {field} exceeds its upper bound"),
        ))),
        None => Ok(()),
    }
}
