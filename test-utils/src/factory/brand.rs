//! Brand factory for creating test brand entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brands with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let brand = BrandFactory::new(&db).name("Cafe").build().await?;
/// ```
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with defaults.
    ///
    /// Defaults:
    /// - name: `"Brand {id}"`
    /// - city: `"Lisbon"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Brand {}", next_id()),
            city: "Lisbon".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the brand entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::brand::Model)` - Created brand entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        let now = now();
        entity::brand::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            document: ActiveValue::Set(String::new()),
            document_type: ActiveValue::Set(String::new()),
            social_name: ActiveValue::Set(String::new()),
            city: ActiveValue::Set(self.city),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brand with default values.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db).build().await
}
