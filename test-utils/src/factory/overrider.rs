//! Overrider factory for creating per-store product overrides.

use crate::factory::helpers::now;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating overrides of a product at a store.
///
/// Every override field defaults to `None`, meaning the base product value applies.
///
/// # Example
///
/// ```rust,ignore
/// let overrider = OverriderFactory::new(&db, product.id, store.id)
///     .price(Some(12.0))
///     .build()
///     .await?;
/// ```
pub struct OverriderFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    place_id: i32,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    enable: bool,
    discount_id: Option<i32>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> OverriderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, product_id: i32, place_id: i32) -> Self {
        Self {
            db,
            product_id,
            place_id,
            name: None,
            description: None,
            image: None,
            price: None,
            enable: true,
            discount_id: None,
            deleted_at: None,
        }
    }

    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn discount_id(mut self, discount_id: Option<i32>) -> Self {
        self.discount_id = discount_id;
        self
    }

    /// Marks the override as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(now());
        self
    }

    pub async fn build(self) -> Result<entity::overrider::Model, DbErr> {
        let now = now();
        entity::overrider::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            place_kind: ActiveValue::Set("store".to_string()),
            place_id: ActiveValue::Set(self.place_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            price: ActiveValue::Set(self.price),
            enable: ActiveValue::Set(self.enable),
            discount_id: ActiveValue::Set(self.discount_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty override (all fields fall back) for a product at a store.
pub async fn create_overrider(
    db: &DatabaseConnection,
    product_id: i32,
    place_id: i32,
) -> Result<entity::overrider::Model, DbErr> {
    OverriderFactory::new(db, product_id, place_id).build().await
}
