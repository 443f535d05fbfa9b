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
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(string(Menu::Name))
                    .col(string(Menu::Description).default(""))
                    .col(integer(Menu::BrandId))
                    .col(timestamp_with_time_zone(Menu::CreatedAt))
                    .col(timestamp_with_time_zone(Menu::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Menu::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_brand_id")
                            .from(Menu::Table, Menu::BrandId)
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
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    Name,
    Description,
    BrandId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
