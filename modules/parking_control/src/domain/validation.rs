//! Payload and pagination validation

use crate::contract::{Direction, NewParkingSpot, ParkingSpotError, Sort, SortField};

pub const MAX_PARKING_SPOT_NUMBER_LEN: usize = 10;
pub const MAX_LICENSE_PLATE_CAR_LEN: usize = 7;
pub const MAX_BRAND_CAR_LEN: usize = 70;
pub const MAX_MODEL_CAR_LEN: usize = 70;
pub const MAX_COLOR_CAR_LEN: usize = 70;
pub const MAX_RESPONSIBLE_NAME_LEN: usize = 130;
pub const MAX_APARTMENT_LEN: usize = 30;
pub const MAX_BLOCK_LEN: usize = 30;

/// Trim every field and check it is non-blank and within its column length.
///
/// All violations are reported at once, joined with `"; "`.
pub fn validate_payload(payload: NewParkingSpot) -> Result<NewParkingSpot, ParkingSpotError> {
    let payload = NewParkingSpot {
        parking_spot_number: payload.parking_spot_number.trim().to_string(),
        license_plate_car: payload.license_plate_car.trim().to_string(),
        brand_car: payload.brand_car.trim().to_string(),
        model_car: payload.model_car.trim().to_string(),
        color_car: payload.color_car.trim().to_string(),
        responsible_name: payload.responsible_name.trim().to_string(),
        apartment: payload.apartment.trim().to_string(),
        block: payload.block.trim().to_string(),
    };

    let fields: [(&str, &str, usize); 8] = [
        ("parkingSpotNumber", payload.parking_spot_number.as_str(), MAX_PARKING_SPOT_NUMBER_LEN),
        ("licensePlateCar", payload.license_plate_car.as_str(), MAX_LICENSE_PLATE_CAR_LEN),
        ("brandCar", payload.brand_car.as_str(), MAX_BRAND_CAR_LEN),
        ("modelCar", payload.model_car.as_str(), MAX_MODEL_CAR_LEN),
        ("colorCar", payload.color_car.as_str(), MAX_COLOR_CAR_LEN),
        ("responsibleName", payload.responsible_name.as_str(), MAX_RESPONSIBLE_NAME_LEN),
        ("apartment", payload.apartment.as_str(), MAX_APARTMENT_LEN),
        ("block", payload.block.as_str(), MAX_BLOCK_LEN),
    ];

    let errors: Vec<String> = fields
        .iter()
        .filter_map(|(name, value, max)| {
            if value.is_empty() {
                Some(format!("{name} must not be blank"))
            } else if value.chars().count() > *max {
                Some(format!("{name} must be at most {max} characters"))
            } else {
                None
            }
        })
        .collect();

    if !errors.is_empty() {
        return Err(ParkingSpotError::validation(errors.join("; ")));
    }

    Ok(payload)
}

/// Parse a `<field>[,asc|desc]` sort expression
pub fn parse_sort(raw: &str) -> Result<Sort, ParkingSpotError> {
    let mut parts = raw.split(',').map(str::trim);
    let field_name = parts.next().unwrap_or_default();

    let field = SortField::parse(field_name).ok_or_else(|| {
        ParkingSpotError::validation(format!("unknown sort field '{field_name}'"))
    })?;

    let direction = match parts.next() {
        None => Direction::Asc,
        Some(dir) if dir.eq_ignore_ascii_case("asc") => Direction::Asc,
        Some(dir) if dir.eq_ignore_ascii_case("desc") => Direction::Desc,
        Some(dir) => {
            return Err(ParkingSpotError::validation(format!(
                "unknown sort direction '{dir}'"
            )))
        }
    };

    if parts.next().is_some() {
        return Err(ParkingSpotError::validation(format!(
            "malformed sort expression '{raw}'"
        )));
    }

    Ok(Sort { field, direction })
}
