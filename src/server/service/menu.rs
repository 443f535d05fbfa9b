use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, menu::MenuRepository},
    error::AppError,
    model::menu::{CreateMenuParams, Menu, MenuWithCategories, UpdateMenuParams},
    service::brand::require_brand,
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu under an existing brand
    pub async fn create(&self, params: CreateMenuParams) -> Result<Menu, AppError> {
        require_brand(self.db, params.brand_id).await?;

        Ok(MenuRepository::new(self.db).create(params).await?)
    }

    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Menu>, AppError> {
        Ok(MenuRepository::new(self.db).find(brand_id).await?)
    }

    /// Gets a menu together with its categories
    pub async fn get(&self, id: i32) -> Result<MenuWithCategories, AppError> {
        let repo = MenuRepository::new(self.db);

        let menu = repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu with id {} not found", id)))?;

        let categories = repo
            .categories_for_menus(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(MenuWithCategories { menu, categories })
    }

    pub async fn update(&self, params: UpdateMenuParams) -> Result<Menu, AppError> {
        Ok(MenuRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Menu, AppError> {
        Ok(MenuRepository::new(self.db).delete(id).await?)
    }

    /// Links a category into a menu
    ///
    /// # Returns
    /// - `Ok(MenuWithCategories)` - The menu after linking
    /// - `Err(AppError::NotFound)` - Menu or category does not exist
    /// - `Err(AppError::BadRequest)` - Menu and category belong to different brands
    pub async fn add_category(
        &self,
        menu_id: i32,
        category_id: i32,
    ) -> Result<MenuWithCategories, AppError> {
        let menu = self.get(menu_id).await?.menu;
        let category = CategoryRepository::new(self.db)
            .get(category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category_id))
            })?;

        if menu.brand_id != category.brand_id {
            return Err(AppError::BadRequest(format!(
                "Category {} belongs to brand {} but menu {} belongs to brand {}",
                category.id, category.brand_id, menu.id, menu.brand_id
            )));
        }

        MenuRepository::new(self.db)
            .add_category(menu_id, category_id)
            .await?;

        self.get(menu_id).await
    }

    /// Unlinks a category from a menu; unlinking a missing link is a no-op
    pub async fn remove_category(
        &self,
        menu_id: i32,
        category_id: i32,
    ) -> Result<MenuWithCategories, AppError> {
        self.get(menu_id).await?;

        MenuRepository::new(self.db)
            .remove_category(menu_id, category_id)
            .await?;

        self.get(menu_id).await
    }
}
