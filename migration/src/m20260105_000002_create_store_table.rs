use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_brand_table::Brand;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(pk_auto(Store::Id))
                    .col(string(Store::Name))
                    .col(integer(Store::BrandId))
                    .col(boolean(Store::Enabled).default(true))
                    .col(string(Store::Image).default(""))
                    .col(double(Store::Latitude).default(0.0))
                    .col(double(Store::Longitude).default(0.0))
                    .col(string(Store::Address).default(""))
                    .col(timestamp_with_time_zone(Store::CreatedAt))
                    .col(timestamp_with_time_zone(Store::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Store::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_brand_id")
                            .from(Store::Table, Store::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Store::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Store {
    Table,
    Id,
    Name,
    BrandId,
    Enabled,
    Image,
    Latitude,
    Longitude,
    Address,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
