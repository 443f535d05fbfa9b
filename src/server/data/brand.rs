use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::brand::{Brand, CreateBrandParams, UpdateBrandParams};

use entity::brand::Column;

pub struct BrandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new brand
    pub async fn create(&self, params: CreateBrandParams) -> Result<Brand, DbErr> {
        let now = Utc::now();

        let entity = entity::brand::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            document: ActiveValue::Set(params.document),
            document_type: ActiveValue::Set(params.document_type),
            social_name: ActiveValue::Set(params.social_name),
            city: ActiveValue::Set(params.city),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Brand::from_entity(entity))
    }

    /// Gets every active brand ordered by name
    pub async fn find_all(&self) -> Result<Vec<Brand>, DbErr> {
        let brands = entity::prelude::Brand::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        Ok(brands.into_iter().map(Brand::from_entity).collect())
    }

    /// Gets an active brand by ID
    pub async fn get(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        let brand = self.find_active(id).await?;

        Ok(brand.map(Brand::from_entity))
    }

    /// Updates the fields present in `params`
    pub async fn update(&self, params: UpdateBrandParams) -> Result<Brand, DbErr> {
        let mut active_model: entity::brand::ActiveModel =
            self.require_active(params.id).await?.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(document) = params.document {
            active_model.document = ActiveValue::Set(document);
        }
        if let Some(document_type) = params.document_type {
            active_model.document_type = ActiveValue::Set(document_type);
        }
        if let Some(social_name) = params.social_name {
            active_model.social_name = ActiveValue::Set(social_name);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Brand::from_entity(active_model.update(self.db).await?))
    }

    /// Soft-deletes a brand and returns it
    pub async fn delete(&self, id: i32) -> Result<Brand, DbErr> {
        let mut active_model: entity::brand::ActiveModel = self.require_active(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Brand::from_entity(active_model.update(self.db).await?))
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn require_active(&self, id: i32) -> Result<entity::brand::Model, DbErr> {
        self.find_active(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Brand with id {} not found", id)))
    }
}
