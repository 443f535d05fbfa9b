use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::availability::AvailabilityDto,
    server::model::reference::{parse_stored_kind, EntityRef, PlaceRef},
};

/// Enable flag of one entity at one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub id: i32,
    pub entity: EntityRef,
    pub place: PlaceRef,
    pub enable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Availability {
    /// Converts an entity model to an availability domain model.
    ///
    /// # Returns
    /// - `Ok(Availability)` - Converted model
    /// - `Err(DbErr::Custom)` - Stored entity or place kind is not a known kind
    pub fn from_entity(entity: entity::availability::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            entity: EntityRef::new(parse_stored_kind(&entity.entity_kind)?, entity.entity_id),
            place: PlaceRef::new(parse_stored_kind(&entity.place_kind)?, entity.place_id),
            enable: entity.enable,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            id: self.id,
            entity: self.entity.kind,
            entity_id: self.entity.id,
            place: self.place.kind,
            place_id: self.place.id,
            enable: self.enable,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
