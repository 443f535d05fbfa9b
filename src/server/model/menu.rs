use chrono::{DateTime, Utc};

use crate::{
    model::menu::{CreateMenuDto, MenuDetailDto, MenuDto, UpdateMenuDto},
    server::model::category::Category,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub brand_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    pub fn from_entity(entity: entity::menu::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            brand_id: entity.brand_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            id: self.id,
            name: self.name,
            description: self.description,
            brand_id: self.brand_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Menu with its linked categories, ordered by `sort_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuWithCategories {
    pub menu: Menu,
    pub categories: Vec<Category>,
}

impl MenuWithCategories {
    pub fn into_dto(self) -> MenuDetailDto {
        MenuDetailDto {
            menu: self.menu.into_dto(),
            categories: self
                .categories
                .into_iter()
                .map(Category::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuParams {
    pub name: String,
    pub description: String,
    pub brand_id: i32,
}

impl CreateMenuParams {
    pub fn from_dto(dto: CreateMenuDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            brand_id: dto.brand_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMenuParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateMenuParams {
    pub fn from_dto(id: i32, dto: UpdateMenuDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
