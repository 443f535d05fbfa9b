use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::kind::{EntityKind, PlaceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub id: i32,
    pub entity: EntityKind,
    pub entity_id: i32,
    pub place: PlaceKind,
    pub place_id: i32,
    pub enable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetAvailabilityDto {
    pub enable: bool,
}
