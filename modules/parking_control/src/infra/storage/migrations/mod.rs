//! Database migrations for parking control

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241210_000001_create_parking_spot::Migration)]
    }
}

mod m20241210_000001_create_parking_spot {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ParkingSpot::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ParkingSpot::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ParkingSpot::ParkingSpotNumber)
                                .string_len(10)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(ParkingSpot::LicensePlateCar)
                                .string_len(7)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(ParkingSpot::BrandCar).string_len(70).not_null())
                        .col(ColumnDef::new(ParkingSpot::ModelCar).string_len(70).not_null())
                        .col(ColumnDef::new(ParkingSpot::ColorCar).string_len(70).not_null())
                        .col(
                            ColumnDef::new(ParkingSpot::RegistrationDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ParkingSpot::ResponsibleName)
                                .string_len(130)
                                .not_null(),
                        )
                        .col(ColumnDef::new(ParkingSpot::Apartment).string_len(30).not_null())
                        .col(ColumnDef::new(ParkingSpot::Block).string_len(30).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_parking_spot_apartment_block")
                        .table(ParkingSpot::Table)
                        .col(ParkingSpot::Apartment)
                        .col(ParkingSpot::Block)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ParkingSpot::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ParkingSpot {
        #[sea_orm(iden = "tb_parking_spot")]
        Table,
        Id,
        ParkingSpotNumber,
        LicensePlateCar,
        BrandCar,
        ModelCar,
        ColorCar,
        RegistrationDate,
        ResponsibleName,
        Apartment,
        Block,
    }
}
