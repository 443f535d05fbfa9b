use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys: entity and place kinds are validated by the API layer
        manager
            .create_table(
                Table::create()
                    .table(Availability::Table)
                    .if_not_exists()
                    .col(pk_auto(Availability::Id))
                    .col(string(Availability::EntityKind))
                    .col(integer(Availability::EntityId))
                    .col(string(Availability::PlaceKind))
                    .col(integer(Availability::PlaceId))
                    .col(boolean(Availability::Enable))
                    .col(timestamp_with_time_zone(Availability::CreatedAt))
                    .col(timestamp_with_time_zone(Availability::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_natural_key")
                    .table(Availability::Table)
                    .col(Availability::EntityKind)
                    .col(Availability::EntityId)
                    .col(Availability::PlaceKind)
                    .col(Availability::PlaceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_place")
                    .table(Availability::Table)
                    .col(Availability::PlaceKind)
                    .col(Availability::PlaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Availability {
    Table,
    Id,
    EntityKind,
    EntityId,
    PlaceKind,
    PlaceId,
    Enable,
    CreatedAt,
    UpdatedAt,
}
