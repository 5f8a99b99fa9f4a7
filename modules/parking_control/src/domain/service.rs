//! Domain service - business logic orchestration

use crate::config::Config;
use crate::contract::error::{
    APARTMENT_ALREADY_REGISTERED, PLATE_ALREADY_REGISTERED, SPOT_ALREADY_IN_USE, STORAGE_CONFLICT,
};
use crate::contract::{NewParkingSpot, Page, PageRequest, ParkingSpot, ParkingSpotError, Sort};
use super::repository::{ParkingSpotRepository, RepositoryError};
use super::validation::{parse_sort, validate_payload};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for parking spot management
pub struct Service {
    repo: Arc<dyn ParkingSpotRepository>,
    default_page_size: u64,
    max_page_size: u64,
}

impl Service {
    /// Create a new service instance with default pagination limits
    pub fn new(repo: Arc<dyn ParkingSpotRepository>) -> Self {
        Self::with_config(repo, &Config::default())
    }

    /// Create a new service instance using the module configuration
    pub fn with_config(repo: Arc<dyn ParkingSpotRepository>, config: &Config) -> Self {
        let max_page_size = config.max_page_size.max(1);
        Self {
            repo,
            default_page_size: config.default_page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }

    /// Register a new parking spot after the three uniqueness checks pass
    pub async fn create_parking_spot(
        &self,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        let payload = validate_payload(payload)?;

        self.ensure_plate_free(&payload.license_plate_car).await?;
        self.ensure_spot_number_free(&payload.parking_spot_number).await?;
        self.ensure_apartment_free(&payload.apartment, &payload.block).await?;

        let spot = payload.into_parking_spot(Uuid::new_v4(), chrono::Utc::now());
        let saved = self.repo.save(&spot).await.map_err(map_repo_error)?;

        tracing::info!(id = %saved.id, spot = %saved.parking_spot_number, "parking spot registered");
        Ok(saved)
    }

    /// List parking spots page by page
    pub async fn list_parking_spots(
        &self,
        request: PageRequest,
    ) -> Result<Page<ParkingSpot>, ParkingSpotError> {
        if request.size == 0 {
            return Err(ParkingSpotError::validation("size must be at least 1"));
        }
        let request = PageRequest {
            size: request.size.min(self.max_page_size),
            ..request
        };

        tracing::debug!(page = request.page, size = request.size, "listing parking spots");
        self.repo.find_all(&request).await.map_err(map_repo_error)
    }

    /// Build a page request from optional query values, applying defaults
    pub fn page_request(
        &self,
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
    ) -> Result<PageRequest, ParkingSpotError> {
        let sort = match sort {
            Some(raw) if !raw.trim().is_empty() => parse_sort(raw)?,
            _ => Sort::default(),
        };

        Ok(PageRequest {
            page: page.unwrap_or(0),
            size: size.unwrap_or(self.default_page_size),
            sort,
        })
    }

    /// Get a parking spot by identifier
    pub async fn get_parking_spot(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError> {
        tracing::debug!(%id, "fetching parking spot");
        self.find_existing(id).await
    }

    /// Replace every mutable field, keeping the stored id and registration date
    pub async fn update_parking_spot(
        &self,
        id: Uuid,
        payload: NewParkingSpot,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        let payload = validate_payload(payload)?;
        let existing = self.find_existing(id).await?;

        // Only values that change can collide with another record.
        if payload.license_plate_car != existing.license_plate_car {
            self.ensure_plate_free(&payload.license_plate_car).await?;
        }
        if payload.parking_spot_number != existing.parking_spot_number {
            self.ensure_spot_number_free(&payload.parking_spot_number).await?;
        }
        if payload.apartment != existing.apartment || payload.block != existing.block {
            self.ensure_apartment_free(&payload.apartment, &payload.block).await?;
        }

        let spot = payload.into_parking_spot(existing.id, existing.registration_date);
        let saved = self.repo.save(&spot).await.map_err(map_repo_error)?;

        tracing::info!(%id, "parking spot updated");
        Ok(saved)
    }

    /// Delete a parking spot
    pub async fn delete_parking_spot(&self, id: Uuid) -> Result<(), ParkingSpotError> {
        let existing = self.find_existing(id).await?;

        self.repo.delete(&existing).await.map_err(map_repo_error)?;

        tracing::info!(%id, "parking spot deleted");
        Ok(())
    }

    // ===== Helper Methods =====

    async fn find_existing(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(ParkingSpotError::NotFound { id })
    }

    async fn ensure_plate_free(&self, license_plate_car: &str) -> Result<(), ParkingSpotError> {
        let taken = self
            .repo
            .exists_by_license_plate_car(license_plate_car)
            .await
            .map_err(map_repo_error)?;
        reject_if(taken, PLATE_ALREADY_REGISTERED)
    }

    async fn ensure_spot_number_free(
        &self,
        parking_spot_number: &str,
    ) -> Result<(), ParkingSpotError> {
        let taken = self
            .repo
            .exists_by_parking_spot_number(parking_spot_number)
            .await
            .map_err(map_repo_error)?;
        reject_if(taken, SPOT_ALREADY_IN_USE)
    }

    async fn ensure_apartment_free(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<(), ParkingSpotError> {
        let taken = self
            .repo
            .exists_by_apartment_and_block(apartment, block)
            .await
            .map_err(map_repo_error)?;
        reject_if(taken, APARTMENT_ALREADY_REGISTERED)
    }
}

fn reject_if(taken: bool, reason: &str) -> Result<(), ParkingSpotError> {
    if taken {
        tracing::warn!(reason, "parking spot uniqueness check failed");
        return Err(ParkingSpotError::conflict(reason));
    }
    Ok(())
}

fn map_repo_error(error: RepositoryError) -> ParkingSpotError {
    match error {
        // A concurrent writer got past the pre-checks first.
        RepositoryError::UniqueViolation(constraint) => {
            tracing::warn!(%constraint, "storage rejected duplicate parking spot");
            ParkingSpotError::conflict(STORAGE_CONFLICT)
        }
        RepositoryError::NotFound(id) => {
            tracing::warn!(%id, "parking spot removed during write");
            ParkingSpotError::NotFound { id }
        }
        RepositoryError::Storage(source) => {
            tracing::error!(error = ?source, "parking spot storage failure");
            ParkingSpotError::Internal
        }
    }
}
