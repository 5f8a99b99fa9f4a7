//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document for the parking control REST API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_parking_spot,
        handlers::list_parking_spots,
        handlers::get_parking_spot,
        handlers::update_parking_spot,
        handlers::delete_parking_spot,
        handlers::health,
    ),
    components(schemas(
        dto::ParkingSpotDto,
        dto::ParkingSpotRequest,
        dto::ParkingSpotPage,
        dto::HealthResponse,
        error::Problem,
    )),
    tags((name = "parking-spot", description = "Parking spot registry"))
)]
pub struct ApiDoc;
