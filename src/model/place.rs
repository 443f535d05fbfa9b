//! Place-specific views of the catalog after availability and overrides are applied.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::kind::PlaceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceProductDto {
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
    /// Override row applied to this product, if any
    pub overrider_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub color: String,
    pub sort_id: i32,
    pub brand_id: i32,
    pub products: Vec<PlaceProductDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceMenuDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub brand_id: i32,
    pub place: PlaceKind,
    pub place_id: i32,
    pub categories: Vec<PlaceCategoryDto>,
}
