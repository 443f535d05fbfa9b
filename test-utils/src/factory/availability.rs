//! Availability factory for inserting enable/disable records.

use crate::factory::helpers::now;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating availability records.
///
/// Kinds are stored as their lowercase names, e.g. `"product"` and `"store"`.
pub struct AvailabilityFactory<'a> {
    db: &'a DatabaseConnection,
    entity_kind: String,
    entity_id: i32,
    place_kind: String,
    place_id: i32,
    enable: bool,
}

impl<'a> AvailabilityFactory<'a> {
    /// Creates a new AvailabilityFactory for a store place, enabled by default.
    pub fn new(
        db: &'a DatabaseConnection,
        entity_kind: impl Into<String>,
        entity_id: i32,
        place_id: i32,
    ) -> Self {
        Self {
            db,
            entity_kind: entity_kind.into(),
            entity_id,
            place_kind: "store".to_string(),
            place_id,
            enable: true,
        }
    }

    pub fn place_kind(mut self, place_kind: impl Into<String>) -> Self {
        self.place_kind = place_kind.into();
        self
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub async fn build(self) -> Result<entity::availability::Model, DbErr> {
        let now = now();
        entity::availability::ActiveModel {
            entity_kind: ActiveValue::Set(self.entity_kind),
            entity_id: ActiveValue::Set(self.entity_id),
            place_kind: ActiveValue::Set(self.place_kind),
            place_id: ActiveValue::Set(self.place_id),
            enable: ActiveValue::Set(self.enable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts an availability record for `entity_kind`/`entity_id` at store `place_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `entity_kind` - `"menu"`, `"category"` or `"product"`
/// - `entity_id` - Id of the gated entity
/// - `place_id` - Store id
/// - `enable` - Whether the entity is offered at the store
pub async fn create_availability(
    db: &DatabaseConnection,
    entity_kind: &str,
    entity_id: i32,
    place_id: i32,
    enable: bool,
) -> Result<entity::availability::Model, DbErr> {
    AvailabilityFactory::new(db, entity_kind, entity_id, place_id)
        .enable(enable)
        .build()
        .await
}
