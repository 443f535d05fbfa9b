//! Store factory for creating test store entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stores belonging to a brand.
pub struct StoreFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
    enabled: bool,
    address: String,
}

impl<'a> StoreFactory<'a> {
    /// Creates a new StoreFactory with defaults.
    ///
    /// Defaults:
    /// - name: `"Store {id}"`
    /// - enabled: `true`
    /// - address: `"Main Street 1"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `brand_id` - Owning brand
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            name: format!("Store {}", next_id()),
            enabled: true,
            address: "Main Street 1".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the store entity into the database.
    pub async fn build(self) -> Result<entity::store::Model, DbErr> {
        let now = now();
        entity::store::ActiveModel {
            name: ActiveValue::Set(self.name),
            brand_id: ActiveValue::Set(self.brand_id),
            enabled: ActiveValue::Set(self.enabled),
            image: ActiveValue::Set(String::new()),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a store with default values for the given brand.
pub async fn create_store(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::store::Model, DbErr> {
    StoreFactory::new(db, brand_id).build().await
}
