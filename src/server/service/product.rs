use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        overrider::OverriderFieldValue,
        product::{CreateProductParams, Product, UpdateProductParams},
    },
    service::{brand::require_brand, overrider::OverriderService},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product under an existing brand
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        require_brand(self.db, params.brand_id).await?;

        Ok(ProductRepository::new(self.db).create(params).await?)
    }

    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).find(brand_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
    }

    /// Updates a product.
    ///
    /// A changed price is copied onto every active override of the product, so
    /// per-place prices follow the catalog price until overridden again.
    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);
        let previous_price = self.get(params.id).await?.price;

        let product = repo.update(params).await?;

        if product.price != previous_price {
            let overriders = OverriderService::new(self.db);
            let ids = overriders.get_overrider_ids(product.id).await?;
            let updated = overriders
                .update_overriders(&ids, OverriderFieldValue::Price(Some(product.price)))
                .await?;

            tracing::info!(
                product_id = product.id,
                price = product.price,
                overriders = updated,
                "Propagated product price to overrides"
            );
        }

        Ok(product)
    }

    /// Soft-deletes a product; its overrides stay in place
    pub async fn delete(&self, id: i32) -> Result<Product, AppError> {
        Ok(ProductRepository::new(self.db).delete(id).await?)
    }
}
