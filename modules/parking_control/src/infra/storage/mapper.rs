//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{ParkingSpot, SortField};

impl From<entity::Model> for ParkingSpot {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            parking_spot_number: entity.parking_spot_number,
            license_plate_car: entity.license_plate_car,
            brand_car: entity.brand_car,
            model_car: entity.model_car,
            color_car: entity.color_car,
            registration_date: entity.registration_date,
            responsible_name: entity.responsible_name,
            apartment: entity.apartment,
            block: entity.block,
        }
    }
}

impl From<&ParkingSpot> for entity::ActiveModel {
    fn from(model: &ParkingSpot) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            parking_spot_number: Set(model.parking_spot_number.clone()),
            license_plate_car: Set(model.license_plate_car.clone()),
            brand_car: Set(model.brand_car.clone()),
            model_car: Set(model.model_car.clone()),
            color_car: Set(model.color_car.clone()),
            registration_date: Set(model.registration_date),
            responsible_name: Set(model.responsible_name.clone()),
            apartment: Set(model.apartment.clone()),
            block: Set(model.block.clone()),
        }
    }
}

impl From<SortField> for entity::Column {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Id => entity::Column::Id,
            SortField::ParkingSpotNumber => entity::Column::ParkingSpotNumber,
            SortField::LicensePlateCar => entity::Column::LicensePlateCar,
            SortField::BrandCar => entity::Column::BrandCar,
            SortField::ModelCar => entity::Column::ModelCar,
            SortField::ColorCar => entity::Column::ColorCar,
            SortField::RegistrationDate => entity::Column::RegistrationDate,
            SortField::ResponsibleName => entity::Column::ResponsibleName,
            SortField::Apartment => entity::Column::Apartment,
            SortField::Block => entity::Column::Block,
        }
    }
}
