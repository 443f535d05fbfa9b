//! Category factory for creating test category entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let category = CategoryFactory::new(&db, brand.id)
///     .name("Drinks")
///     .sort_id(2)
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
    sort_id: i32,
    enable: bool,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with defaults.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - sort_id: `0`
    /// - enable: `true`
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            name: format!("Category {}", next_id()),
            sort_id: 0,
            enable: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sort_id(mut self, sort_id: i32) -> Self {
        self.sort_id = sort_id;
        self
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = now();
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            image: ActiveValue::Set(String::new()),
            color: ActiveValue::Set(String::new()),
            sort_id: ActiveValue::Set(self.sort_id),
            enable: ActiveValue::Set(self.enable),
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

/// Creates a category with default values for the given brand.
pub async fn create_category(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, brand_id).build().await
}
