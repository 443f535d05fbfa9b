use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::{
    model::kind::{EntityKind, PlaceKind},
    server::model::{
        availability::Availability,
        reference::{AvailabilityKey, EntityRef, PlaceRef},
    },
};

use entity::availability::Column;

pub struct AvailabilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the enable flag for an entity at a place.
    ///
    /// Inserts the record or, when one already exists for the key, overwrites only
    /// its flag and `updated_at`. Runs as a single `INSERT ... ON CONFLICT` statement.
    pub async fn upsert(&self, key: AvailabilityKey, enable: bool) -> Result<Availability, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Availability::insert(entity::availability::ActiveModel {
            entity_kind: ActiveValue::Set(key.entity.kind.as_str().to_string()),
            entity_id: ActiveValue::Set(key.entity.id),
            place_kind: ActiveValue::Set(key.place.kind.as_str().to_string()),
            place_id: ActiveValue::Set(key.place.id),
            enable: ActiveValue::Set(enable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                Column::EntityKind,
                Column::EntityId,
                Column::PlaceKind,
                Column::PlaceId,
            ])
            .update_columns([Column::Enable, Column::UpdatedAt])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Availability::from_entity(entity)
    }

    /// Gets the record for a key, `None` when the entity was never gated there
    pub async fn get(&self, key: AvailabilityKey) -> Result<Option<Availability>, DbErr> {
        by_key(key)
            .one(self.db)
            .await?
            .map(Availability::from_entity)
            .transpose()
    }

    /// Gets all records of one entity kind at one place
    pub async fn find_by_place(
        &self,
        entity_kind: EntityKind,
        place: PlaceRef,
    ) -> Result<Vec<Availability>, DbErr> {
        entity::prelude::Availability::find()
            .filter(Column::EntityKind.eq(entity_kind.as_str()))
            .filter(Column::PlaceKind.eq(place.kind.as_str()))
            .filter(Column::PlaceId.eq(place.id))
            .order_by_asc(Column::EntityId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Availability::from_entity)
            .collect()
    }

    /// Gets all records at one place regardless of entity kind
    pub async fn find_all_by_place(&self, place: PlaceRef) -> Result<Vec<Availability>, DbErr> {
        entity::prelude::Availability::find()
            .filter(Column::PlaceKind.eq(place.kind.as_str()))
            .filter(Column::PlaceId.eq(place.id))
            .all(self.db)
            .await?
            .into_iter()
            .map(Availability::from_entity)
            .collect()
    }

    /// Gets the records of one entity across every place of a kind
    pub async fn find_by_entity(
        &self,
        entity: EntityRef,
        place_kind: PlaceKind,
    ) -> Result<Vec<Availability>, DbErr> {
        entity::prelude::Availability::find()
            .filter(Column::EntityKind.eq(entity.kind.as_str()))
            .filter(Column::EntityId.eq(entity.id))
            .filter(Column::PlaceKind.eq(place_kind.as_str()))
            .order_by_asc(Column::PlaceId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Availability::from_entity)
            .collect()
    }

    /// Deletes the record for a key, returning the number of rows removed
    pub async fn delete(&self, key: AvailabilityKey) -> Result<u64, DbErr> {
        let result = entity::prelude::Availability::delete_many()
            .filter(Column::EntityKind.eq(key.entity.kind.as_str()))
            .filter(Column::EntityId.eq(key.entity.id))
            .filter(Column::PlaceKind.eq(key.place.kind.as_str()))
            .filter(Column::PlaceId.eq(key.place.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn by_key(key: AvailabilityKey) -> Select<entity::prelude::Availability> {
    entity::prelude::Availability::find()
        .filter(Column::EntityKind.eq(key.entity.kind.as_str()))
        .filter(Column::EntityId.eq(key.entity.id))
        .filter(Column::PlaceKind.eq(key.place.kind.as_str()))
        .filter(Column::PlaceId.eq(key.place.id))
}
