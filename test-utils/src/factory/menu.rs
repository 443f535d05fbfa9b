//! Menu factory for creating test menu entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
    description: String,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new MenuFactory named `"Menu {id}"` with an empty description.
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            name: format!("Menu {}", next_id()),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        let now = now();
        entity::menu::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            brand_id: ActiveValue::Set(self.brand_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu with default values for the given brand.
pub async fn create_menu(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::menu::Model, DbErr> {
    MenuFactory::new(db, brand_id).build().await
}
