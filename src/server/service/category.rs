use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, product::ProductRepository},
    error::AppError,
    model::category::{Category, CategoryWithProducts, CreateCategoryParams, UpdateCategoryParams},
    service::brand::require_brand,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category under an existing brand
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        require_brand(self.db, params.brand_id).await?;

        Ok(CategoryRepository::new(self.db).create(params).await?)
    }

    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).find(brand_id).await?)
    }

    /// Gets a category together with its products
    pub async fn get(&self, id: i32) -> Result<CategoryWithProducts, AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        let products = repo
            .products_for_categories(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(CategoryWithProducts { category, products })
    }

    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).delete(id).await?)
    }

    /// Links a product into a category; both must belong to the same brand
    pub async fn add_product(
        &self,
        category_id: i32,
        product_id: i32,
    ) -> Result<CategoryWithProducts, AppError> {
        let category = self.get(category_id).await?.category;
        let product = ProductRepository::new(self.db)
            .get(product_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Product with id {} not found", product_id))
            })?;

        if category.brand_id != product.brand_id {
            return Err(AppError::BadRequest(format!(
                "Product {} belongs to brand {} but category {} belongs to brand {}",
                product.id, product.brand_id, category.id, category.brand_id
            )));
        }

        CategoryRepository::new(self.db)
            .add_product(category_id, product_id)
            .await?;

        self.get(category_id).await
    }

    /// Unlinks a product from a category; unlinking a missing link is a no-op
    pub async fn remove_product(
        &self,
        category_id: i32,
        product_id: i32,
    ) -> Result<CategoryWithProducts, AppError> {
        self.get(category_id).await?;

        CategoryRepository::new(self.db)
            .remove_product(category_id, product_id)
            .await?;

        self.get(category_id).await
    }
}
