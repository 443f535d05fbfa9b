use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::deserialize_some, kind::PlaceKind};

/// Override fields that can be propagated across all of a product's overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverriderField {
    Name,
    Description,
    Image,
    Price,
    Enable,
}

impl OverriderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverriderField::Name => "name",
            OverriderField::Description => "description",
            OverriderField::Image => "image",
            OverriderField::Price => "price",
            OverriderField::Enable => "enable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverriderDto {
    pub id: i32,
    pub product_id: i32,
    pub place: PlaceKind,
    pub place_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub enable: bool,
    pub discount_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOverriderDto {
    pub product_id: i32,
    pub place: PlaceKind,
    pub place_id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_enable")]
    pub enable: bool,
    #[serde(default)]
    pub discount_id: Option<i32>,
}

fn default_enable() -> bool {
    true
}

/// Partial override update.
///
/// Absent fields are left unchanged; `null` clears a nullable field so the
/// product's own value applies again.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOverriderDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<f64>>,
    #[serde(default)]
    pub enable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub discount_id: Option<Option<i32>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverriderQuery {
    pub product_id: Option<i32>,
    pub place: Option<PlaceKind>,
    pub place_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverriderFieldQuery {
    pub field: OverriderField,
}

/// Value of one override field at one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverriderFieldValueDto {
    pub id: i32,
    pub place: PlaceKind,
    pub place_id: i32,
    pub field: OverriderField,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAllOverridersDto {
    pub field: OverriderField,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAllOverridersResultDto {
    pub updated: u64,
}
