//! SeaORM repository implementations

use crate::contract::{Direction, Page, PageRequest, ParkingSpot, SortField};
use crate::domain::repository::{ParkingSpotRepository, RepoResult, RepositoryError};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ItemsAndPagesNumber, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use sea_orm::sea_query::{Order, SimpleExpr};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

pub struct SeaOrmParkingSpotRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmParkingSpotRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn exists_where(&self, filter: SimpleExpr) -> RepoResult<bool> {
        let count = entity::Entity::find()
            .filter(filter)
            .count(&*self.db)
            .await
            .map_err(map_db_error)?;

        Ok(count > 0)
    }
}

fn map_db_error(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(constraint)) => {
            RepositoryError::UniqueViolation(constraint)
        }
        _ => RepositoryError::Storage(anyhow::Error::new(err)),
    }
}

#[async_trait]
impl ParkingSpotRepository for SeaOrmParkingSpotRepository {
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepoResult<bool> {
        self.exists_where(entity::Column::LicensePlateCar.eq(license_plate_car))
            .await
    }

    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepoResult<bool> {
        self.exists_where(entity::Column::ParkingSpotNumber.eq(parking_spot_number))
            .await
    }

    async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> RepoResult<bool> {
        self.exists_where(
            entity::Column::Apartment
                .eq(apartment)
                .and(entity::Column::Block.eq(block)),
        )
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ParkingSpot>> {
        let result = entity::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_all(&self, request: &PageRequest) -> RepoResult<Page<ParkingSpot>> {
        let column: entity::Column = request.sort.field.into();
        let order = match request.sort.direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        };

        let mut query = entity::Entity::find().order_by(column, order);
        // Keep pages stable when the sort column has duplicates
        if request.sort.field != SortField::Id {
            query = query.order_by_asc(entity::Column::Id);
        }

        let paginator = query.paginate(&*self.db, request.size);
        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator.num_items_and_pages().await.map_err(map_db_error)?;
        // Pages past the end are never fetched: their offset may not fit an i64 bind value.
        let results = if request.page < number_of_pages {
            paginator
                .fetch_page(request.page)
                .await
                .map_err(map_db_error)?
        } else {
            Vec::new()
        };

        Ok(Page {
            items: results.into_iter().map(|e| e.into()).collect(),
            total_items: number_of_items,
            total_pages: number_of_pages,
            page: request.page,
            size: request.size,
        })
    }

    async fn save(&self, spot: &ParkingSpot) -> RepoResult<ParkingSpot> {
        let existing = entity::Entity::find_by_id(spot.id)
            .one(&*self.db)
            .await
            .map_err(map_db_error)?;

        let active: entity::ActiveModel = spot.into();
        let result = if existing.is_some() {
            entity::Entity::update(active)
                .exec(&*self.db)
                .await
                .map_err(|err| match err {
                    DbErr::RecordNotUpdated => RepositoryError::NotFound(spot.id),
                    other => map_db_error(other),
                })?
        } else {
            entity::Entity::insert(active)
                .exec_with_returning(&*self.db)
                .await
                .map_err(map_db_error)?
        };

        Ok(result.into())
    }

    async fn delete(&self, spot: &ParkingSpot) -> RepoResult<()> {
        entity::Entity::delete_by_id(spot.id)
            .exec(&*self.db)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
