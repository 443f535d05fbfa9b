use sea_orm::DatabaseConnection;

use crate::{
    model::overrider::OverriderField,
    server::{
        data::{overrider::OverriderRepository, product::ProductRepository},
        error::AppError,
        model::{
            overrider::{
                CreateOverriderParams, Overrider, OverriderFieldValue, OverriderFilter,
                UpdateOverriderParams,
            },
            reference::PlaceRef,
        },
    },
};

pub struct OverriderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OverriderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the override of a product at a place.
    ///
    /// Reuses the existing row for the same product and place, reviving it if it
    /// was soft-deleted.
    pub async fn create(&self, params: CreateOverriderParams) -> Result<Overrider, AppError> {
        self.require_product(params.product_id).await?;

        let repo = OverriderRepository::new(self.db);

        Ok(repo.upsert(params).await?)
    }

    pub async fn find(&self, filter: OverriderFilter) -> Result<Vec<Overrider>, AppError> {
        let repo = OverriderRepository::new(self.db);

        Ok(repo.find(filter).await?)
    }

    pub async fn find_by_place(&self, place: PlaceRef) -> Result<Vec<Overrider>, AppError> {
        let repo = OverriderRepository::new(self.db);

        Ok(repo.find_by_place(place).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Overrider, AppError> {
        let repo = OverriderRepository::new(self.db);

        repo.get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Overrider with id {} not found", id)))
    }

    /// Applies a partial update; absent fields keep their values
    pub async fn update(&self, params: UpdateOverriderParams) -> Result<Overrider, AppError> {
        let repo = OverriderRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes an override and returns the deleted row
    pub async fn delete(&self, id: i32) -> Result<Overrider, AppError> {
        let repo = OverriderRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    /// Ids of the active overrides of a product
    pub async fn get_overrider_ids(&self, product_id: i32) -> Result<Vec<i32>, AppError> {
        let repo = OverriderRepository::new(self.db);

        Ok(repo.get_ids_by_product(product_id).await?)
    }

    /// Sets one field to one value on exactly the overrides in `ids`
    pub async fn update_overriders(
        &self,
        ids: &[i32],
        value: OverriderFieldValue,
    ) -> Result<u64, AppError> {
        let repo = OverriderRepository::new(self.db);

        let field = value.field();
        let updated = repo.update_field(ids, value).await?;

        tracing::debug!(
            field = field.as_str(),
            requested = ids.len(),
            updated,
            "Propagated override field"
        );

        Ok(updated)
    }

    /// Gets every active override of a product so one field can be listed per place
    pub async fn get_overriders_by_field(
        &self,
        product_id: i32,
        field: OverriderField,
    ) -> Result<Vec<Overrider>, AppError> {
        self.require_product(product_id).await?;

        tracing::debug!(product_id, field = field.as_str(), "Listing override field");

        self.find(OverriderFilter {
            product_id: Some(product_id),
            ..Default::default()
        })
        .await
    }

    /// Sets one field on every active override of a product
    pub async fn update_all_for_product(
        &self,
        product_id: i32,
        value: OverriderFieldValue,
    ) -> Result<u64, AppError> {
        self.require_product(product_id).await?;

        let ids = self.get_overrider_ids(product_id).await?;

        self.update_overriders(&ids, value).await
    }

    async fn require_product(&self, product_id: i32) -> Result<(), AppError> {
        ProductRepository::new(self.db)
            .get(product_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", product_id)))
    }
}
