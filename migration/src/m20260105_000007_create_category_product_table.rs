use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_category_table::Category,
    m20260105_000005_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(CategoryProduct::Id))
                    .col(integer(CategoryProduct::CategoryId))
                    .col(integer(CategoryProduct::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_product_category_id")
                            .from(CategoryProduct::Table, CategoryProduct::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_product_product_id")
                            .from(CategoryProduct::Table, CategoryProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_product_unique")
                    .table(CategoryProduct::Table)
                    .col(CategoryProduct::CategoryId)
                    .col(CategoryProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CategoryProduct {
    Table,
    Id,
    CategoryId,
    ProductId,
}
