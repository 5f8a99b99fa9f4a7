//! Contract models for parking control
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered parking spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    /// System-generated identifier, immutable after creation
    pub id: Uuid,
    /// Spot number, unique across all records
    pub parking_spot_number: String,
    /// License plate of the car, unique across all records
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    /// Set once at creation, never altered by updates
    pub registration_date: DateTime<Utc>,
    /// Occupant name
    pub responsible_name: String,
    /// Apartment; (apartment, block) is unique
    pub apartment: String,
    pub block: String,
}

/// Client-supplied fields of a parking spot, used by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewParkingSpot {
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

impl NewParkingSpot {
    /// Build a full record, taking identity and registration date from the caller
    pub fn into_parking_spot(self, id: Uuid, registration_date: DateTime<Utc>) -> ParkingSpot {
        ParkingSpot {
            id,
            parking_spot_number: self.parking_spot_number,
            license_plate_car: self.license_plate_car,
            brand_car: self.brand_car,
            model_car: self.model_car,
            color_car: self.color_car,
            registration_date,
            responsible_name: self.responsible_name,
            apartment: self.apartment,
            block: self.block,
        }
    }
}

/// Sortable parking spot fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    RegistrationDate,
    ResponsibleName,
    Apartment,
    Block,
}

impl SortField {
    /// Parse the wire (camelCase) field name
    pub fn parse(name: &str) -> Option<Self> {
        let field = match name {
            "id" => Self::Id,
            "parkingSpotNumber" => Self::ParkingSpotNumber,
            "licensePlateCar" => Self::LicensePlateCar,
            "brandCar" => Self::BrandCar,
            "modelCar" => Self::ModelCar,
            "colorCar" => Self::ColorCar,
            "registrationDate" => Self::RegistrationDate,
            "responsibleName" => Self::ResponsibleName,
            "apartment" => Self::Apartment,
            "block" => Self::Block,
            _ => return None,
        };
        Some(field)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Sort order for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: Direction::Asc,
        }
    }
}

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort: Sort::default(),
        }
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records across all pages
    pub total_items: u64,
    pub total_pages: u64,
    /// Zero-based page number
    pub page: u64,
    pub size: u64,
}
