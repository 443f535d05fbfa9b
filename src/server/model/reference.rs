//! Typed references to catalog entities and places.

use std::str::FromStr;

use sea_orm::DbErr;

use crate::model::kind::{EntityKind, PlaceKind, UnknownKindError};

/// A catalog entity identified by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: i32,
}

/// A place identified by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceRef {
    pub kind: PlaceKind,
    pub id: i32,
}

/// Natural key of an availability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvailabilityKey {
    pub entity: EntityRef,
    pub place: PlaceRef,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: i32) -> Self {
        Self { kind, id }
    }
}

impl PlaceRef {
    pub fn new(kind: PlaceKind, id: i32) -> Self {
        Self { kind, id }
    }

    pub fn store(id: i32) -> Self {
        Self::new(PlaceKind::Store, id)
    }
}

impl AvailabilityKey {
    pub fn new(entity: EntityRef, place: PlaceRef) -> Self {
        Self { entity, place }
    }
}

/// Parses a kind column read back from the database.
///
/// Rows are only written through the typed API, so an unknown value means the
/// table was edited by hand.
pub fn parse_stored_kind<K>(value: &str) -> Result<K, DbErr>
where
    K: FromStr<Err = UnknownKindError>,
{
    value
        .parse::<K>()
        .map_err(|e| DbErr::Custom(format!("Corrupt kind column: {}", e)))
}
