use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_menu_table::Menu, m20260105_000004_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuCategory::Id))
                    .col(integer(MenuCategory::MenuId))
                    .col(integer(MenuCategory::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_category_menu_id")
                            .from(MenuCategory::Table, MenuCategory::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_category_category_id")
                            .from(MenuCategory::Table, MenuCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_category_unique")
                    .table(MenuCategory::Table)
                    .col(MenuCategory::MenuId)
                    .col(MenuCategory::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuCategory {
    Table,
    Id,
    MenuId,
    CategoryId,
}
