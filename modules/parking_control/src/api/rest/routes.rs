//! Route registration

use super::{dto::*, error::Problem, handlers, ApiDoc};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use uuid::Uuid;

/// Register all REST routes on the given router
pub fn register_routes(router: Router, service: Arc<Service>, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(cors_max_age);

    router
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route(
            "/parking-spot",
            get(list_parking_spots_handler).post(create_parking_spot_handler),
        )
        .route(
            "/parking-spot/{id}",
            get(get_parking_spot_handler)
                .put(update_parking_spot_handler)
                .delete(delete_parking_spot_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ===== Handler wrappers that extract service from Extension =====

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn create_parking_spot_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<ParkingSpotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParkingSpotDto>), Problem> {
    handlers::create_parking_spot(service, json).await
}

async fn list_parking_spots_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListParkingSpotsQuery>, QueryRejection>,
) -> Result<Json<ParkingSpotPage>, Problem> {
    handlers::list_parking_spots(service, query).await
}

async fn get_parking_spot_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ParkingSpotDto>, Problem> {
    handlers::get_parking_spot(service, path).await
}

async fn update_parking_spot_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<Uuid>, PathRejection>,
    json: Result<Json<ParkingSpotRequest>, JsonRejection>,
) -> Result<Json<ParkingSpotDto>, Problem> {
    handlers::update_parking_spot(service, path, json).await
}

async fn delete_parking_spot_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<(StatusCode, &'static str), Problem> {
    handlers::delete_parking_spot(service, path).await
}
