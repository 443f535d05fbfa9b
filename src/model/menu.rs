use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub brand_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Menu together with the categories linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDetailDto {
    #[serde(flatten)]
    pub menu: MenuDto,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMenuDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub brand_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMenuDto {
    pub name: Option<String>,
    pub description: Option<String>,
}
