use sea_orm::DatabaseConnection;

use crate::server::{
    data::store::StoreRepository,
    error::AppError,
    model::store::{CreateStoreParams, Store, UpdateStoreParams},
    service::brand::require_brand,
};

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a store under an existing brand
    pub async fn create(&self, params: CreateStoreParams) -> Result<Store, AppError> {
        require_brand(self.db, params.brand_id).await?;

        Ok(StoreRepository::new(self.db).create(params).await?)
    }

    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Store>, AppError> {
        Ok(StoreRepository::new(self.db).find(brand_id).await?)
    }

    /// Gets the stores of one brand
    pub async fn find_by_brand(&self, brand_id: i32) -> Result<Vec<Store>, AppError> {
        self.find(Some(brand_id)).await
    }

    pub async fn get(&self, id: i32) -> Result<Store, AppError> {
        StoreRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store with id {} not found", id)))
    }

    pub async fn update(&self, params: UpdateStoreParams) -> Result<Store, AppError> {
        Ok(StoreRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Store, AppError> {
        Ok(StoreRepository::new(self.db).delete(id).await?)
    }
}
