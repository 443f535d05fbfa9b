use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    category::{Category, CreateCategoryParams, UpdateCategoryParams},
    product::Product,
};

use entity::category::Column;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();

        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            color: ActiveValue::Set(params.color),
            sort_id: ActiveValue::Set(params.sort_id),
            enable: ActiveValue::Set(params.enable),
            brand_id: ActiveValue::Set(params.brand_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets active categories ordered by `sort_id`, optionally restricted to one brand
    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Category>, DbErr> {
        let mut query = entity::prelude::Category::find().filter(Column::DeletedAt.is_null());

        if let Some(brand_id) = brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }

        let categories = query
            .order_by_asc(Column::SortId)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets an active category by ID
    pub async fn get(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = self.find_active(id).await?;

        Ok(category.map(Category::from_entity))
    }

    /// Updates the fields present in `params`
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, DbErr> {
        let mut active_model: entity::category::ActiveModel =
            self.require_active(params.id).await?.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(sort_id) = params.sort_id {
            active_model.sort_id = ActiveValue::Set(sort_id);
        }
        if let Some(enable) = params.enable {
            active_model.enable = ActiveValue::Set(enable);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Category::from_entity(active_model.update(self.db).await?))
    }

    /// Soft-deletes a category and returns it
    pub async fn delete(&self, id: i32) -> Result<Category, DbErr> {
        let mut active_model: entity::category::ActiveModel =
            self.require_active(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Category::from_entity(active_model.update(self.db).await?))
    }

    /// Links a product into a category, doing nothing if already linked
    pub async fn add_product(&self, category_id: i32, product_id: i32) -> Result<(), DbErr> {
        entity::prelude::CategoryProduct::insert(entity::category_product::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            product_id: ActiveValue::Set(product_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::category_product::Column::CategoryId,
                entity::category_product::Column::ProductId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Unlinks a product from a category, returning the number of links removed
    pub async fn remove_product(&self, category_id: i32, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CategoryProduct::delete_many()
            .filter(entity::category_product::Column::CategoryId.eq(category_id))
            .filter(entity::category_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the active products linked to each of the given categories, ordered by id
    pub async fn products_for_categories(
        &self,
        category_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Product>>, DbErr> {
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::CategoryProduct::find()
            .filter(entity::category_product::Column::CategoryId.is_in(category_ids.iter().copied()))
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = links.iter().map(|link| link.product_id).collect();
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let products: HashMap<i32, entity::product::Model> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .filter(entity::product::Column::DeletedAt.is_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut result: HashMap<i32, Vec<Product>> = HashMap::new();
        for link in links {
            if let Some(product) = products.get(&link.product_id) {
                result
                    .entry(link.category_id)
                    .or_default()
                    .push(Product::from_entity(product.clone()));
            }
        }

        for products in result.values_mut() {
            products.sort_by_key(|p| p.id);
        }

        Ok(result)
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn require_active(&self, id: i32) -> Result<entity::category::Model, DbErr> {
        self.find_active(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Category with id {} not found",
            id
        )))
    }
}
