use chrono::{DateTime, Utc};

use crate::model::brand::{BrandDto, CreateBrandDto, UpdateBrandDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
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

impl Brand {
    pub fn from_entity(entity: entity::brand::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            document: entity.document,
            document_type: entity.document_type,
            social_name: entity.social_name,
            city: entity.city,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
            description: self.description,
            document: self.document,
            document_type: self.document_type,
            social_name: self.social_name,
            city: self.city,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBrandParams {
    pub name: String,
    pub description: String,
    pub document: String,
    pub document_type: String,
    pub social_name: String,
    pub city: String,
}

impl CreateBrandParams {
    pub fn from_dto(dto: CreateBrandDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            document: dto.document,
            document_type: dto.document_type,
            social_name: dto.social_name,
            city: dto.city,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBrandParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub document: Option<String>,
    pub document_type: Option<String>,
    pub social_name: Option<String>,
    pub city: Option<String>,
}

impl UpdateBrandParams {
    pub fn from_dto(id: i32, dto: UpdateBrandDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            document: dto.document,
            document_type: dto.document_type,
            social_name: dto.social_name,
            city: dto.city,
        }
    }
}
