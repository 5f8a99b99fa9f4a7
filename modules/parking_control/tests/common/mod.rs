//! Common test utilities: payload fixtures, mock repository and SQLite setup

#![allow(dead_code)]

use async_trait::async_trait;
use parking_control::contract::{Direction, NewParkingSpot, Page, PageRequest, ParkingSpot, SortField};
use parking_control::domain::repository::{ParkingSpotRepository, RepoResult, RepositoryError};
use parking_control::ParkingControlModule;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use uuid::Uuid;

/// A valid payload; `n` varies every unique field
pub fn payload(n: u32) -> NewParkingSpot {
    NewParkingSpot {
        parking_spot_number: format!("{n:03}A"),
        license_plate_car: format!("ABC{n:04}"),
        brand_car: "audi".to_string(),
        model_car: "q5".to_string(),
        color_car: "black".to_string(),
        responsible_name: format!("Resident {n}"),
        apartment: format!("{}", 100 + n),
        block: "A".to_string(),
    }
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// Open a fresh in-memory SQLite database with the schema applied
pub async fn sqlite_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // A single connection keeps every query on the same in-memory database
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to open in-memory SQLite");
    ParkingControlModule::default()
        .migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

/// In-memory repository with failure injection
#[derive(Clone, Default)]
pub struct MockParkingSpotRepo {
    data: Arc<RwLock<HashMap<Uuid, ParkingSpot>>>,
    unavailable: Arc<AtomicBool>,
    reject_next_save: Arc<AtomicBool>,
    vanish_before_next_save: Arc<AtomicBool>,
}

impl MockParkingSpotRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn get(&self, id: Uuid) -> Option<ParkingSpot> {
        self.data.read().get(&id).cloned()
    }

    /// Every call fails as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Next save fails with a unique violation, as when a concurrent insert won
    pub fn reject_next_save(&self) {
        self.reject_next_save.store(true, AtomicOrdering::SeqCst);
    }

    /// Next save finds its row already deleted by another writer
    pub fn vanish_before_next_save(&self) {
        self.vanish_before_next_save.store(true, AtomicOrdering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(RepositoryError::Storage(anyhow::anyhow!(
                "connection refused"
            )));
        }
        Ok(())
    }

    fn any(&self, pred: impl Fn(&ParkingSpot) -> bool) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.data.read().values().any(pred))
    }
}

fn compare(a: &ParkingSpot, b: &ParkingSpot, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::ParkingSpotNumber => a.parking_spot_number.cmp(&b.parking_spot_number),
        SortField::LicensePlateCar => a.license_plate_car.cmp(&b.license_plate_car),
        SortField::BrandCar => a.brand_car.cmp(&b.brand_car),
        SortField::ModelCar => a.model_car.cmp(&b.model_car),
        SortField::ColorCar => a.color_car.cmp(&b.color_car),
        SortField::RegistrationDate => a.registration_date.cmp(&b.registration_date),
        SortField::ResponsibleName => a.responsible_name.cmp(&b.responsible_name),
        SortField::Apartment => a.apartment.cmp(&b.apartment),
        SortField::Block => a.block.cmp(&b.block),
    }
}

#[async_trait]
impl ParkingSpotRepository for MockParkingSpotRepo {
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepoResult<bool> {
        self.any(|s| s.license_plate_car == license_plate_car)
    }

    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepoResult<bool> {
        self.any(|s| s.parking_spot_number == parking_spot_number)
    }

    async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> RepoResult<bool> {
        self.any(|s| s.apartment == apartment && s.block == block)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ParkingSpot>> {
        self.check_available()?;
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> RepoResult<Page<ParkingSpot>> {
        self.check_available()?;
        let mut all: Vec<ParkingSpot> = self.data.read().values().cloned().collect();
        all.sort_by(|a, b| {
            let primary = match request.sort.direction {
                Direction::Asc => compare(a, b, request.sort.field),
                Direction::Desc => compare(b, a, request.sort.field),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total_items = all.len() as u64;
        let offset = usize::try_from(request.page.saturating_mul(request.size)).unwrap_or(usize::MAX);
        let items = all
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();

        Ok(Page {
            items,
            total_items,
            total_pages: total_items.div_ceil(request.size),
            page: request.page,
            size: request.size,
        })
    }

    async fn save(&self, spot: &ParkingSpot) -> RepoResult<ParkingSpot> {
        self.check_available()?;
        if self.reject_next_save.swap(false, AtomicOrdering::SeqCst) {
            return Err(RepositoryError::UniqueViolation(
                "tb_parking_spot.license_plate_car".to_string(),
            ));
        }
        if self.vanish_before_next_save.swap(false, AtomicOrdering::SeqCst) {
            self.data.write().remove(&spot.id);
            return Err(RepositoryError::NotFound(spot.id));
        }
        self.data.write().insert(spot.id, spot.clone());
        Ok(spot.clone())
    }

    async fn delete(&self, spot: &ParkingSpot) -> RepoResult<()> {
        self.check_available()?;
        self.data.write().remove(&spot.id);
        Ok(())
    }
}
