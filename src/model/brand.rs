use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub document: String,
    pub document_type: String,
    pub social_name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBrandDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub social_name: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBrandDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub document: Option<String>,
    pub document_type: Option<String>,
    pub social_name: Option<String>,
    pub city: Option<String>,
}
