//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Parking spot response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDto {
    /// System-generated identifier
    pub id: Uuid,

    #[schema(example = "205B")]
    pub parking_spot_number: String,

    #[schema(example = "RRS8562")]
    pub license_plate_car: String,

    #[schema(example = "audi")]
    pub brand_car: String,

    #[schema(example = "q5")]
    pub model_car: String,

    #[schema(example = "black")]
    pub color_car: String,

    /// UTC time of registration
    pub registration_date: chrono::DateTime<chrono::Utc>,

    #[schema(example = "Carlos Daniel")]
    pub responsible_name: String,

    #[schema(example = "205")]
    pub apartment: String,

    #[schema(example = "B")]
    pub block: String,
}

/// Create/Update parking spot request
///
/// Missing fields deserialize as empty strings so that they are reported by
/// payload validation together with blank ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkingSpotRequest {
    #[schema(example = "205B")]
    pub parking_spot_number: String,

    #[schema(example = "RRS8562")]
    pub license_plate_car: String,

    #[schema(example = "audi")]
    pub brand_car: String,

    #[schema(example = "q5")]
    pub model_car: String,

    #[schema(example = "black")]
    pub color_car: String,

    #[schema(example = "Carlos Daniel")]
    pub responsible_name: String,

    #[schema(example = "205")]
    pub apartment: String,

    #[schema(example = "B")]
    pub block: String,
}

/// Query parameters for listing parking spots
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParkingSpotsQuery {
    /// Zero-based page number (default 0)
    pub page: Option<u64>,
    /// Page size (default 10)
    pub size: Option<u64>,
    /// Sort expression `<field>[,asc|desc]` (default `id,asc`)
    #[param(example = "licensePlateCar,desc")]
    pub sort: Option<String>,
}

/// Paginated list of parking spots
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotPage {
    /// Records on this page
    pub content: Vec<ParkingSpotDto>,

    /// Total number of records
    pub total_elements: u64,

    /// Total number of pages
    pub total_pages: u64,

    /// Zero-based page number
    pub number: u64,

    /// Page size
    pub size: u64,
}

/// Liveness response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}
