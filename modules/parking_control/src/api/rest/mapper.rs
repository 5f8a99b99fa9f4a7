//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::ParkingSpot> for ParkingSpotDto {
    fn from(spot: contract::ParkingSpot) -> Self {
        Self {
            id: spot.id,
            parking_spot_number: spot.parking_spot_number,
            license_plate_car: spot.license_plate_car,
            brand_car: spot.brand_car,
            model_car: spot.model_car,
            color_car: spot.color_car,
            registration_date: spot.registration_date,
            responsible_name: spot.responsible_name,
            apartment: spot.apartment,
            block: spot.block,
        }
    }
}

impl From<ParkingSpotRequest> for contract::NewParkingSpot {
    fn from(req: ParkingSpotRequest) -> Self {
        Self {
            parking_spot_number: req.parking_spot_number,
            license_plate_car: req.license_plate_car,
            brand_car: req.brand_car,
            model_car: req.model_car,
            color_car: req.color_car,
            responsible_name: req.responsible_name,
            apartment: req.apartment,
            block: req.block,
        }
    }
}

impl From<contract::Page<contract::ParkingSpot>> for ParkingSpotPage {
    fn from(page: contract::Page<contract::ParkingSpot>) -> Self {
        Self {
            content: page.items.into_iter().map(Into::into).collect(),
            total_elements: page.total_items,
            total_pages: page.total_pages,
            number: page.page,
            size: page.size,
        }
    }
}
