use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    category::Category,
    menu::{CreateMenuParams, Menu, UpdateMenuParams},
};

use entity::menu::Column;

pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new menu
    pub async fn create(&self, params: CreateMenuParams) -> Result<Menu, DbErr> {
        let now = Utc::now();

        let entity = entity::menu::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            brand_id: ActiveValue::Set(params.brand_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Menu::from_entity(entity))
    }

    /// Gets active menus, optionally restricted to one brand
    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Menu>, DbErr> {
        let mut query = entity::prelude::Menu::find().filter(Column::DeletedAt.is_null());

        if let Some(brand_id) = brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }

        let menus = query.order_by_asc(Column::Id).all(self.db).await?;

        Ok(menus.into_iter().map(Menu::from_entity).collect())
    }

    /// Gets an active menu by ID
    pub async fn get(&self, id: i32) -> Result<Option<Menu>, DbErr> {
        let menu = self.find_active(id).await?;

        Ok(menu.map(Menu::from_entity))
    }

    /// Updates the fields present in `params`
    pub async fn update(&self, params: UpdateMenuParams) -> Result<Menu, DbErr> {
        let mut active_model: entity::menu::ActiveModel =
            self.require_active(params.id).await?.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Menu::from_entity(active_model.update(self.db).await?))
    }

    /// Soft-deletes a menu and returns it
    pub async fn delete(&self, id: i32) -> Result<Menu, DbErr> {
        let mut active_model: entity::menu::ActiveModel = self.require_active(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Menu::from_entity(active_model.update(self.db).await?))
    }

    /// Links a category into a menu, doing nothing if already linked
    pub async fn add_category(&self, menu_id: i32, category_id: i32) -> Result<(), DbErr> {
        entity::prelude::MenuCategory::insert(entity::menu_category::ActiveModel {
            menu_id: ActiveValue::Set(menu_id),
            category_id: ActiveValue::Set(category_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::menu_category::Column::MenuId,
                entity::menu_category::Column::CategoryId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Unlinks a category from a menu, returning the number of links removed
    pub async fn remove_category(&self, menu_id: i32, category_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MenuCategory::delete_many()
            .filter(entity::menu_category::Column::MenuId.eq(menu_id))
            .filter(entity::menu_category::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the active categories linked to each of the given menus.
    ///
    /// Categories are ordered by `sort_id` then id. Menus without categories are
    /// absent from the map.
    pub async fn categories_for_menus(
        &self,
        menu_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Category>>, DbErr> {
        if menu_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::MenuId.is_in(menu_ids.iter().copied()))
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = links.iter().map(|link| link.category_id).collect();
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let categories: HashMap<i32, entity::category::Model> = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(category_ids))
            .filter(entity::category::Column::DeletedAt.is_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut result: HashMap<i32, Vec<Category>> = HashMap::new();
        for link in links {
            if let Some(category) = categories.get(&link.category_id) {
                result
                    .entry(link.menu_id)
                    .or_default()
                    .push(Category::from_entity(category.clone()));
            }
        }

        for categories in result.values_mut() {
            categories.sort_by_key(|c| (c.sort_id, c.id));
        }

        Ok(result)
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::menu::Model>, DbErr> {
        entity::prelude::Menu::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn require_active(&self, id: i32) -> Result<entity::menu::Model, DbErr> {
        self.find_active(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Menu with id {} not found", id)))
    }
}
