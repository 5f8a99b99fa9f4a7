//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::Problem};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Confirmation body returned by delete
pub const DELETED_MESSAGE: &str = "parking spot deleted";

/// Register a new parking spot
#[utoipa::path(
    post,
    path = "/parking-spot",
    tag = "parking-spot",
    request_body = ParkingSpotRequest,
    responses(
        (status = 201, description = "Parking spot registered", body = ParkingSpotDto),
        (status = 400, description = "Invalid payload", body = Problem),
        (status = 409, description = "Plate, spot number or apartment already registered", body = Problem),
    )
)]
pub async fn create_parking_spot(
    service: Arc<Service>,
    json: Result<Json<ParkingSpotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParkingSpotDto>), Problem> {
    let Json(req) = json?;

    let spot = service.create_parking_spot(req.into()).await?;

    Ok((StatusCode::CREATED, Json(spot.into())))
}

/// List parking spots page by page
#[utoipa::path(
    get,
    path = "/parking-spot",
    tag = "parking-spot",
    params(ListParkingSpotsQuery),
    responses(
        (status = 200, description = "A page of parking spots", body = ParkingSpotPage),
        (status = 400, description = "Invalid pagination parameters", body = Problem),
    )
)]
pub async fn list_parking_spots(
    service: Arc<Service>,
    query: Result<Query<ListParkingSpotsQuery>, QueryRejection>,
) -> Result<Json<ParkingSpotPage>, Problem> {
    let Query(query) = query?;

    let request = service.page_request(query.page, query.size, query.sort.as_deref())?;
    let page = service.list_parking_spots(request).await?;

    Ok(Json(page.into()))
}

/// Get a parking spot by identifier
#[utoipa::path(
    get,
    path = "/parking-spot/{id}",
    tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot identifier")),
    responses(
        (status = 200, description = "The parking spot", body = ParkingSpotDto),
        (status = 404, description = "Parking spot not found", body = Problem),
    )
)]
pub async fn get_parking_spot(
    service: Arc<Service>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ParkingSpotDto>, Problem> {
    let Path(id) = path?;

    let spot = service.get_parking_spot(id).await?;

    Ok(Json(spot.into()))
}

/// Replace a parking spot, keeping its id and registration date
#[utoipa::path(
    put,
    path = "/parking-spot/{id}",
    tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot identifier")),
    request_body = ParkingSpotRequest,
    responses(
        (status = 200, description = "Parking spot updated", body = ParkingSpotDto),
        (status = 400, description = "Invalid payload", body = Problem),
        (status = 404, description = "Parking spot not found", body = Problem),
        (status = 409, description = "Plate, spot number or apartment already registered", body = Problem),
    )
)]
pub async fn update_parking_spot(
    service: Arc<Service>,
    path: Result<Path<Uuid>, PathRejection>,
    json: Result<Json<ParkingSpotRequest>, JsonRejection>,
) -> Result<Json<ParkingSpotDto>, Problem> {
    let Path(id) = path?;
    let Json(req) = json?;

    let spot = service.update_parking_spot(id, req.into()).await?;

    Ok(Json(spot.into()))
}

/// Delete a parking spot
#[utoipa::path(
    delete,
    path = "/parking-spot/{id}",
    tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot identifier")),
    responses(
        (status = 200, description = "Parking spot deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Parking spot not found", body = Problem),
    )
)]
pub async fn delete_parking_spot(
    service: Arc<Service>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<(StatusCode, &'static str), Problem> {
    let Path(id) = path?;

    service.delete_parking_spot(id).await?;

    Ok((StatusCode::OK, DELETED_MESSAGE))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
