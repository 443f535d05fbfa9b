use chrono::{DateTime, Utc};

use crate::model::product::{CreateProductDto, ProductDto, UpdateProductDto};

/// Shared catalog product, the base every per-place override is merged onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            sku: entity.sku,
            price: entity.price,
            unit: entity.unit,
            color: entity.color,
            discount_id: entity.discount_id,
            brand_id: entity.brand_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            sku: self.sku,
            price: self.price,
            unit: self.unit,
            color: self.color,
            discount_id: self.discount_id,
            brand_id: self.brand_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub image: String,
    pub sku: String,
    pub price: f64,
    pub unit: String,
    pub color: String,
    pub discount_id: Option<i32>,
    pub brand_id: i32,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
            sku: dto.sku,
            price: dto.price,
            unit: dto.unit,
            color: dto.color,
            discount_id: dto.discount_id,
            brand_id: dto.brand_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub discount_id: Option<Option<i32>>,
}

impl UpdateProductParams {
    pub fn from_dto(id: i32, dto: UpdateProductDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            image: dto.image,
            sku: dto.sku,
            price: dto.price,
            unit: dto.unit,
            color: dto.color,
            discount_id: dto.discount_id,
        }
    }
}
