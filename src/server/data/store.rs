use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::store::{CreateStoreParams, Store, UpdateStoreParams};

use entity::store::Column;

pub struct StoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new store
    pub async fn create(&self, params: CreateStoreParams) -> Result<Store, DbErr> {
        let now = Utc::now();

        let entity = entity::store::ActiveModel {
            name: ActiveValue::Set(params.name),
            brand_id: ActiveValue::Set(params.brand_id),
            enabled: ActiveValue::Set(params.enabled),
            image: ActiveValue::Set(params.image),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            address: ActiveValue::Set(params.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Store::from_entity(entity))
    }

    /// Gets active stores, optionally restricted to one brand
    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Store>, DbErr> {
        let mut query = entity::prelude::Store::find().filter(Column::DeletedAt.is_null());

        if let Some(brand_id) = brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }

        let stores = query.order_by_asc(Column::Id).all(self.db).await?;

        Ok(stores.into_iter().map(Store::from_entity).collect())
    }

    /// Gets an active store by ID
    pub async fn get(&self, id: i32) -> Result<Option<Store>, DbErr> {
        let store = self.find_active(id).await?;

        Ok(store.map(Store::from_entity))
    }

    /// Updates the fields present in `params`
    pub async fn update(&self, params: UpdateStoreParams) -> Result<Store, DbErr> {
        let mut active_model: entity::store::ActiveModel =
            self.require_active(params.id).await?.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(enabled) = params.enabled {
            active_model.enabled = ActiveValue::Set(enabled);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Store::from_entity(active_model.update(self.db).await?))
    }

    /// Soft-deletes a store and returns it
    pub async fn delete(&self, id: i32) -> Result<Store, DbErr> {
        let mut active_model: entity::store::ActiveModel = self.require_active(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Store::from_entity(active_model.update(self.db).await?))
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::store::Model>, DbErr> {
        entity::prelude::Store::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn require_active(&self, id: i32) -> Result<entity::store::Model, DbErr> {
        self.find_active(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Store with id {} not found", id)))
    }
}
