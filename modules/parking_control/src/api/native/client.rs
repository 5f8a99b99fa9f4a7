//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{NewParkingSpot, Page, PageRequest, ParkingSpot, ParkingSpotApi, ParkingSpotError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ParkingSpotApi for NativeClient {
    async fn create_parking_spot(
        &self,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        self.service.create_parking_spot(payload).await
    }

    async fn list_parking_spots(
        &self,
        request: PageRequest,
    ) -> Result<Page<ParkingSpot>, ParkingSpotError> {
        self.service.list_parking_spots(request).await
    }

    async fn get_parking_spot(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError> {
        self.service.get_parking_spot(id).await
    }

    async fn update_parking_spot(
        &self,
        id: Uuid,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        self.service.update_parking_spot(id, payload).await
    }

    async fn delete_parking_spot(&self, id: Uuid) -> Result<(), ParkingSpotError> {
        self.service.delete_parking_spot(id).await
    }
}
