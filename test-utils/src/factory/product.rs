//! Product factory for creating test product entities.

use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db, brand.id)
///     .name("Espresso")
///     .price(4.5)
///     .discount_id(Some(3))
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
    description: String,
    image: String,
    price: f64,
    discount_id: Option<i32>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with defaults.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - description: `"A test product"`
    /// - image: `"product.png"`
    /// - price: `10.0`
    /// - discount_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `brand_id` - Owning brand
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            name: format!("Product {}", next_id()),
            description: "A test product".to_string(),
            image: "product.png".to_string(),
            price: 10.0,
            discount_id: None,
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

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn discount_id(mut self, discount_id: Option<i32>) -> Self {
        self.discount_id = discount_id;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = now();
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            sku: ActiveValue::Set(String::new()),
            price: ActiveValue::Set(self.price),
            unit: ActiveValue::Set("unit".to_string()),
            color: ActiveValue::Set(String::new()),
            discount_id: ActiveValue::Set(self.discount_id),
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

/// Creates a product with default values for the given brand.
pub async fn create_product(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, brand_id).build().await
}
