use sea_orm::DatabaseConnection;

use crate::{
    model::kind::{EntityKind, PlaceKind},
    server::{
        data::availability::AvailabilityRepository,
        error::AppError,
        model::{
            availability::Availability,
            reference::{AvailabilityKey, EntityRef, PlaceRef},
        },
    },
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enables or disables an entity at a place, creating the record if needed
    pub async fn enable_entity(
        &self,
        key: AvailabilityKey,
        enable: bool,
    ) -> Result<Availability, AppError> {
        let repo = AvailabilityRepository::new(self.db);

        let availability = repo.upsert(key, enable).await?;

        tracing::debug!(
            entity = %key.entity.kind,
            entity_id = key.entity.id,
            place = %key.place.kind,
            place_id = key.place.id,
            enable,
            "Availability set"
        );

        Ok(availability)
    }

    /// Gets the availability record for a key
    ///
    /// # Returns
    /// - `Ok(Availability)` - The stored record
    /// - `Err(AppError::NotFound)` - The entity was never gated at the place
    pub async fn get(&self, key: AvailabilityKey) -> Result<Availability, AppError> {
        let repo = AvailabilityRepository::new(self.db);

        repo.get(key).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "No availability for {} {} at {} {}",
                key.entity.kind, key.entity.id, key.place.kind, key.place.id
            ))
        })
    }

    /// Gets the records of one entity across every place of a kind
    pub async fn find_by_entity(
        &self,
        entity: EntityRef,
        place_kind: PlaceKind,
    ) -> Result<Vec<Availability>, AppError> {
        let repo = AvailabilityRepository::new(self.db);

        Ok(repo.find_by_entity(entity, place_kind).await?)
    }

    /// Gets the records of one entity kind at one place
    pub async fn find_by_place(
        &self,
        entity_kind: EntityKind,
        place: PlaceRef,
    ) -> Result<Vec<Availability>, AppError> {
        let repo = AvailabilityRepository::new(self.db);

        Ok(repo.find_by_place(entity_kind, place).await?)
    }

    /// Removes the record for a key so the entity reverts to enabled.
    ///
    /// Succeeds whether or not a record existed.
    pub async fn remove_entity(&self, key: AvailabilityKey) -> Result<(), AppError> {
        let repo = AvailabilityRepository::new(self.db);

        let removed = repo.delete(key).await?;

        if removed == 0 {
            tracing::debug!(
                entity = %key.entity.kind,
                entity_id = key.entity.id,
                place = %key.place.kind,
                place_id = key.place.id,
                "No availability to remove"
            );
        }

        Ok(())
    }

    /// Entity kinds that can be gated
    pub fn entities() -> Vec<EntityKind> {
        EntityKind::ALL.to_vec()
    }

    /// Place kinds an entity can be gated at
    pub fn places() -> Vec<PlaceKind> {
        PlaceKind::ALL.to_vec()
    }
}
