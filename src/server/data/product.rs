use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

use entity::product::Column;

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let now = Utc::now();

        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            sku: ActiveValue::Set(params.sku),
            price: ActiveValue::Set(params.price),
            unit: ActiveValue::Set(params.unit),
            color: ActiveValue::Set(params.color),
            discount_id: ActiveValue::Set(params.discount_id),
            brand_id: ActiveValue::Set(params.brand_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Gets active products, optionally restricted to one brand
    pub async fn find(&self, brand_id: Option<i32>) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find().filter(Column::DeletedAt.is_null());

        if let Some(brand_id) = brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }

        let products = query.order_by_asc(Column::Id).all(self.db).await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Gets an active product by ID
    pub async fn get(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let product = self.find_active(id).await?;

        Ok(product.map(Product::from_entity))
    }

    /// Updates the fields present in `params`
    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, DbErr> {
        let mut active_model: entity::product::ActiveModel =
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
        if let Some(sku) = params.sku {
            active_model.sku = ActiveValue::Set(sku);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(unit) = params.unit {
            active_model.unit = ActiveValue::Set(unit);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(discount_id) = params.discount_id {
            active_model.discount_id = ActiveValue::Set(discount_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Product::from_entity(active_model.update(self.db).await?))
    }

    /// Soft-deletes a product and returns it.
    ///
    /// Overrides of the product are left in place.
    pub async fn delete(&self, id: i32) -> Result<Product, DbErr> {
        let mut active_model: entity::product::ActiveModel =
            self.require_active(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Product::from_entity(active_model.update(self.db).await?))
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn require_active(&self, id: i32) -> Result<entity::product::Model, DbErr> {
        self.find_active(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Product with id {} not found",
            id
        )))
    }
}
