use chrono::{DateTime, Utc};

use crate::model::store::{CreateStoreDto, StoreDto, UpdateStoreDto};

/// A physical store, the only place kind so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub brand_id: i32,
    pub enabled: bool,
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn from_entity(entity: entity::store::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand_id: entity.brand_id,
            enabled: entity.enabled,
            image: entity.image,
            latitude: entity.latitude,
            longitude: entity.longitude,
            address: entity.address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StoreDto {
        StoreDto {
            id: self.id,
            name: self.name,
            brand_id: self.brand_id,
            enabled: self.enabled,
            image: self.image,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStoreParams {
    pub name: String,
    pub brand_id: i32,
    pub enabled: bool,
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl CreateStoreParams {
    pub fn from_dto(dto: CreateStoreDto) -> Self {
        Self {
            name: dto.name,
            brand_id: dto.brand_id,
            enabled: dto.enabled,
            image: dto.image,
            latitude: dto.latitude,
            longitude: dto.longitude,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStoreParams {
    pub id: i32,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl UpdateStoreParams {
    pub fn from_dto(id: i32, dto: UpdateStoreDto) -> Self {
        Self {
            id,
            name: dto.name,
            enabled: dto.enabled,
            image: dto.image,
            latitude: dto.latitude,
            longitude: dto.longitude,
            address: dto.address,
        }
    }
}
