use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub sku: String,
    pub price: f64,
    pub unit: String,
    pub color: String,
    pub discount_id: Option<i32>,
    pub brand_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub discount_id: Option<i32>,
    pub brand_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    /// `null` removes the discount
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub discount_id: Option<Option<i32>>,
}
