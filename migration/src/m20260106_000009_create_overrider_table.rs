use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // product_id is a weak reference: soft-deleting a product leaves its overrides
        manager
            .create_table(
                Table::create()
                    .table(Overrider::Table)
                    .if_not_exists()
                    .col(pk_auto(Overrider::Id))
                    .col(integer(Overrider::ProductId))
                    .col(string(Overrider::PlaceKind))
                    .col(integer(Overrider::PlaceId))
                    .col(string_null(Overrider::Name))
                    .col(string_null(Overrider::Description))
                    .col(string_null(Overrider::Image))
                    .col(double_null(Overrider::Price))
                    .col(boolean(Overrider::Enable).default(true))
                    .col(integer_null(Overrider::DiscountId))
                    .col(timestamp_with_time_zone(Overrider::CreatedAt))
                    .col(timestamp_with_time_zone(Overrider::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Overrider::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_overrider_natural_key")
                    .table(Overrider::Table)
                    .col(Overrider::ProductId)
                    .col(Overrider::PlaceKind)
                    .col(Overrider::PlaceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Overrider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Overrider {
    Table,
    Id,
    ProductId,
    PlaceKind,
    PlaceId,
    Name,
    Description,
    Image,
    Price,
    Enable,
    DiscountId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
