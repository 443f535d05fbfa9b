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
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::Description).default(""))
                    .col(string(Product::Image).default(""))
                    .col(string(Product::Sku).default(""))
                    .col(double(Product::Price).default(0.0))
                    .col(string(Product::Unit).default(""))
                    .col(string(Product::Color).default(""))
                    // Weak reference, discounts are managed elsewhere
                    .col(integer_null(Product::DiscountId))
                    .col(integer(Product::BrandId))
                    .col(timestamp_with_time_zone(Product::CreatedAt))
                    .col(timestamp_with_time_zone(Product::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Product::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_brand_id")
                            .from(Product::Table, Product::BrandId)
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
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    Image,
    Sku,
    Price,
    Unit,
    Color,
    DiscountId,
    BrandId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
