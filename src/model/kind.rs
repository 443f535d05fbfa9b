//! Closed sets of entity and place kinds.
//!
//! Kinds arrive as lowercase path segments and are stored as the same lowercase
//! strings. Parsing is total: anything outside the set is an `UnknownKindError`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Catalog entity kinds that can be gated per place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Menu,
    Category,
    Product,
}

/// Kinds of place an entity can be gated or overridden at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Store,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownKindError {
    pub kind: &'static str,
    pub value: String,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Menu, EntityKind::Category, EntityKind::Product];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Menu => "menu",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
        }
    }
}

impl PlaceKind {
    pub const ALL: [PlaceKind; 1] = [PlaceKind::Store];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceKind::Store => "store",
        }
    }
}

impl FromStr for EntityKind {
    type Err = UnknownKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownKindError {
                kind: "entity",
                value: value.to_string(),
            })
    }
}

impl FromStr for PlaceKind {
    type Err = UnknownKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PlaceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownKindError {
                kind: "place",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
