//! Override models and the typed values used for bulk propagation.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::{
        kind::PlaceKind,
        overrider::{
            CreateOverriderDto, OverriderDto, OverriderField, OverriderFieldValueDto,
            OverriderQuery, UpdateOverriderDto,
        },
    },
    server::model::reference::{parse_stored_kind, PlaceRef},
};

/// Per-place override of a product's display and pricing fields.
///
/// `None` in any overridable field means the product's own value applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Overrider {
    pub id: i32,
    pub product_id: i32,
    pub place: PlaceRef,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub enable: bool,
    pub discount_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Overrider {
    pub fn from_entity(entity: entity::overrider::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            product_id: entity.product_id,
            place: PlaceRef::new(parse_stored_kind(&entity.place_kind)?, entity.place_id),
            name: entity.name,
            description: entity.description,
            image: entity.image,
            price: entity.price,
            enable: entity.enable,
            discount_id: entity.discount_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OverriderDto {
        OverriderDto {
            id: self.id,
            product_id: self.product_id,
            place: self.place.kind,
            place_id: self.place.id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            enable: self.enable,
            discount_id: self.discount_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Current value of one field as JSON, `null` when the field falls back.
    pub fn field_value(&self, field: OverriderField) -> Value {
        match field {
            OverriderField::Name => self.name.clone().into(),
            OverriderField::Description => self.description.clone().into(),
            OverriderField::Image => self.image.clone().into(),
            OverriderField::Price => self.price.into(),
            OverriderField::Enable => self.enable.into(),
        }
    }

    pub fn into_field_value_dto(self, field: OverriderField) -> OverriderFieldValueDto {
        OverriderFieldValueDto {
            id: self.id,
            place: self.place.kind,
            place_id: self.place.id,
            field,
            value: self.field_value(field),
        }
    }
}

/// Parameters for creating (or reviving) the override of a product at a place.
#[derive(Debug, Clone)]
pub struct CreateOverriderParams {
    pub product_id: i32,
    pub place: PlaceRef,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub enable: bool,
    pub discount_id: Option<i32>,
}

impl CreateOverriderParams {
    pub fn from_dto(dto: CreateOverriderDto) -> Self {
        Self {
            product_id: dto.product_id,
            place: PlaceRef::new(dto.place, dto.place_id),
            name: dto.name,
            description: dto.description,
            image: dto.image,
            price: dto.price,
            enable: dto.enable,
            discount_id: dto.discount_id,
        }
    }
}

/// Partial update of an override.
///
/// Outer `None` leaves a field unchanged, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateOverriderParams {
    pub id: i32,
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub price: Option<Option<f64>>,
    pub enable: Option<bool>,
    pub discount_id: Option<Option<i32>>,
}

impl UpdateOverriderParams {
    pub fn from_dto(id: i32, dto: UpdateOverriderDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            image: dto.image,
            price: dto.price,
            enable: dto.enable,
            discount_id: dto.discount_id,
        }
    }
}

/// Equality filter over active overrides. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct OverriderFilter {
    pub product_id: Option<i32>,
    pub place_kind: Option<PlaceKind>,
    pub place_id: Option<i32>,
}

impl OverriderFilter {
    pub fn from_query(query: OverriderQuery) -> Self {
        Self {
            product_id: query.product_id,
            place_kind: query.place,
            place_id: query.place_id,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldValueError {
    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// A value for one overridable field, typed by the field it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum OverriderFieldValue {
    Name(Option<String>),
    Description(Option<String>),
    Image(Option<String>),
    Price(Option<f64>),
    Enable(bool),
}

impl OverriderFieldValue {
    /// Checks that `value` has the JSON type `field` stores.
    ///
    /// Text fields take a string, price takes a number, enable takes a boolean.
    /// `null` is accepted for every nullable field and clears it.
    pub fn from_json(field: OverriderField, value: Value) -> Result<Self, FieldValueError> {
        let mismatch = |expected| FieldValueError::TypeMismatch {
            field: field.as_str(),
            expected,
        };

        match field {
            OverriderField::Name => optional_string(value)
                .map(Self::Name)
                .ok_or_else(|| mismatch("a string or null")),
            OverriderField::Description => optional_string(value)
                .map(Self::Description)
                .ok_or_else(|| mismatch("a string or null")),
            OverriderField::Image => optional_string(value)
                .map(Self::Image)
                .ok_or_else(|| mismatch("a string or null")),
            OverriderField::Price => match value {
                Value::Null => Ok(Self::Price(None)),
                Value::Number(n) => n
                    .as_f64()
                    .map(|price| Self::Price(Some(price)))
                    .ok_or_else(|| mismatch("a number or null")),
                _ => Err(mismatch("a number or null")),
            },
            OverriderField::Enable => match value {
                Value::Bool(enable) => Ok(Self::Enable(enable)),
                _ => Err(mismatch("a boolean")),
            },
        }
    }

    pub fn field(&self) -> OverriderField {
        match self {
            Self::Name(_) => OverriderField::Name,
            Self::Description(_) => OverriderField::Description,
            Self::Image(_) => OverriderField::Image,
            Self::Price(_) => OverriderField::Price,
            Self::Enable(_) => OverriderField::Enable,
        }
    }
}

fn optional_string(value: Value) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s)),
        _ => None,
    }
}
