//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Parking spot table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tb_parking_spot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub parking_spot_number: String,

    #[sea_orm(unique)]
    pub license_plate_car: String,

    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,

    /// Set at creation only
    pub registration_date: DateTimeUtc,

    pub responsible_name: String,

    /// (apartment, block) carries a unique index, see migrations
    pub apartment: String,
    pub block: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
