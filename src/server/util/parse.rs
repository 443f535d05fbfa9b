use crate::{
    model::kind::{EntityKind, PlaceKind},
    server::{
        error::AppError,
        model::reference::{EntityRef, PlaceRef},
    },
};

/// Parses a positive record id from a path segment
///
/// # Arguments
/// - `name` - Name of the path parameter, used in the error message
/// - `value` - The raw segment to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - Segment is not a positive integer
pub fn parse_id(name: &str, value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "Invalid {}: '{}' is not a valid id",
            name, value
        ))),
    }
}

/// Parses an entity kind and id from path segments
pub fn parse_entity(kind: &str, id: &str) -> Result<EntityRef, AppError> {
    let kind: EntityKind = kind.parse()?;

    Ok(EntityRef::new(kind, parse_id("entity_id", id)?))
}

/// Parses a place kind and id from path segments
pub fn parse_place(kind: &str, id: &str) -> Result<PlaceRef, AppError> {
    let kind: PlaceKind = kind.parse()?;

    Ok(PlaceRef::new(kind, parse_id("place_id", id)?))
}
