//! Product fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::product;

pub const DEFAULT_NAME: &str = "Test Product";
pub const DEFAULT_DESCRIPTION: &str = "A test product";
pub const DEFAULT_IMAGE: &str = "product.png";
pub const DEFAULT_PRICE: f64 = 10.0;
pub const DEFAULT_BRAND_ID: i32 = 1;

/// Creates a product entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Product"`
/// - price: `10.0`
/// - discount_id: `None`
/// - brand_id: `1`
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// Builder for customized product entity models.
pub struct ProductEntityBuilder {
    id: i32,
    name: String,
    description: String,
    image: String,
    price: f64,
    discount_id: Option<i32>,
    brand_id: i32,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            price: DEFAULT_PRICE,
            discount_id: None,
            brand_id: DEFAULT_BRAND_ID,
        }
    }
}

impl ProductEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    pub fn brand_id(mut self, brand_id: i32) -> Self {
        self.brand_id = brand_id;
        self
    }

    pub fn build(self) -> product::Model {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        product::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            sku: String::new(),
            price: self.price,
            unit: "unit".to_string(),
            color: String::new(),
            discount_id: self.discount_id,
            brand_id: self.brand_id,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}
