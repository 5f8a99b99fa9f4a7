//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with parking control.
//! NO HTTP - direct function calls for performance.

use super::{
    error::ParkingSpotError,
    model::{NewParkingSpot, Page, PageRequest, ParkingSpot},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Parking control API for inter-module communication
#[async_trait]
pub trait ParkingSpotApi: Send + Sync {
    /// Register a new parking spot
    async fn create_parking_spot(
        &self,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// List parking spots page by page
    async fn list_parking_spots(
        &self,
        request: PageRequest,
    ) -> Result<Page<ParkingSpot>, ParkingSpotError>;

    /// Get a parking spot by identifier
    async fn get_parking_spot(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError>;

    /// Replace the mutable fields of a parking spot
    async fn update_parking_spot(
        &self,
        id: Uuid,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// Delete a parking spot
    async fn delete_parking_spot(&self, id: Uuid) -> Result<(), ParkingSpotError>;
}
