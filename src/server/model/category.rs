use chrono::{DateTime, Utc};

use crate::{
    model::category::{CategoryDetailDto, CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    server::model::product::Product,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub color: String,
    pub sort_id: i32,
    pub enable: bool,
    pub brand_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            color: entity.color,
            sort_id: entity.sort_id,
            enable: entity.enable,
            brand_id: entity.brand_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            color: self.color,
            sort_id: self.sort_id,
            enable: self.enable,
            brand_id: self.brand_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Category with its linked products, ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub products: Vec<Product>,
}

impl CategoryWithProducts {
    pub fn into_dto(self) -> CategoryDetailDto {
        CategoryDetailDto {
            category: self.category.into_dto(),
            products: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: String,
    pub image: String,
    pub color: String,
    pub sort_id: i32,
    pub enable: bool,
    pub brand_id: i32,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
            color: dto.color,
            sort_id: dto.sort_id,
            enable: dto.enable,
            brand_id: dto.brand_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub color: Option<String>,
    pub sort_id: Option<i32>,
    pub enable: Option<bool>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            image: dto.image,
            color: dto.color,
            sort_id: dto.sort_id,
            enable: dto.enable,
        }
    }
}
