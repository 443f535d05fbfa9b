use sea_orm::DatabaseConnection;

use crate::server::{
    data::brand::BrandRepository,
    error::AppError,
    model::brand::{Brand, CreateBrandParams, UpdateBrandParams},
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBrandParams) -> Result<Brand, AppError> {
        Ok(BrandRepository::new(self.db).create(params).await?)
    }

    pub async fn find(&self) -> Result<Vec<Brand>, AppError> {
        Ok(BrandRepository::new(self.db).find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Brand with id {} not found", id)))
    }

    pub async fn update(&self, params: UpdateBrandParams) -> Result<Brand, AppError> {
        Ok(BrandRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Brand, AppError> {
        Ok(BrandRepository::new(self.db).delete(id).await?)
    }
}

/// Fails with NotFound unless an active brand with `brand_id` exists
pub(super) async fn require_brand(db: &DatabaseConnection, brand_id: i32) -> Result<(), AppError> {
    BrandService::new(db).get(brand_id).await.map(|_| ())
}
