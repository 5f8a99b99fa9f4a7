//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Page, PageRequest, ParkingSpot};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected a write because of a unique constraint
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The row disappeared before the write reached it
    #[error("parking spot {0} no longer exists")]
    NotFound(Uuid),

    /// Storage unavailable, query failure, or undecodable row
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository for parking spots
#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Check if any record uses this license plate
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepoResult<bool>;

    /// Check if any record uses this spot number
    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepoResult<bool>;

    /// Check if any record is registered to this apartment and block
    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str)
        -> RepoResult<bool>;

    /// Find a parking spot by identifier
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ParkingSpot>>;

    /// List parking spots with pagination and sorting
    async fn find_all(&self, request: &PageRequest) -> RepoResult<Page<ParkingSpot>>;

    /// Insert the record, or update it if a row with the same id exists
    async fn save(&self, spot: &ParkingSpot) -> RepoResult<ParkingSpot>;

    /// Delete the record
    async fn delete(&self, spot: &ParkingSpot) -> RepoResult<()>;
}
