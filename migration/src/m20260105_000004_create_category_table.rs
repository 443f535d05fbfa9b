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
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .col(string(Category::Description).default(""))
                    .col(string(Category::Image).default(""))
                    .col(string(Category::Color).default(""))
                    .col(integer(Category::SortId).default(0))
                    .col(boolean(Category::Enable).default(true))
                    .col(integer(Category::BrandId))
                    .col(timestamp_with_time_zone(Category::CreatedAt))
                    .col(timestamp_with_time_zone(Category::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Category::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_brand_id")
                            .from(Category::Table, Category::BrandId)
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
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    Description,
    Image,
    Color,
    SortId,
    Enable,
    BrandId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
