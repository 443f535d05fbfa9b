//! Overrider fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::overrider;

pub const DEFAULT_PRODUCT_ID: i32 = 1;
pub const DEFAULT_PLACE_ID: i32 = 1;

/// Creates an override model where every field falls back to the product.
///
/// # Default Values
/// - id: `1`
/// - product_id: `1`
/// - place: store `1`
/// - name, description, image, price, discount_id: `None`
/// - enable: `true`
pub fn entity() -> overrider::Model {
    entity_builder().build()
}

/// Creates an override entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let overrider = fixture::overrider::entity_builder()
///     .name(Some("House Espresso"))
///     .price(Some(3.0))
///     .build();
/// ```
pub fn entity_builder() -> OverriderEntityBuilder {
    OverriderEntityBuilder::default()
}

pub struct OverriderEntityBuilder {
    id: i32,
    product_id: i32,
    place_id: i32,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    enable: bool,
    discount_id: Option<i32>,
}

impl Default for OverriderEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            product_id: DEFAULT_PRODUCT_ID,
            place_id: DEFAULT_PLACE_ID,
            name: None,
            description: None,
            image: None,
            price: None,
            enable: true,
            discount_id: None,
        }
    }
}

impl OverriderEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = product_id;
        self
    }

    pub fn place_id(mut self, place_id: i32) -> Self {
        self.place_id = place_id;
        self
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

    pub fn build(self) -> overrider::Model {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        overrider::Model {
            id: self.id,
            product_id: self.product_id,
            place_kind: "store".to_string(),
            place_id: self.place_id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            enable: self.enable,
            discount_id: self.discount_id,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}
