use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        availability::{AvailabilityDto, SetAvailabilityDto},
        kind::{EntityKind, PlaceKind},
    },
    server::{
        error::AppError,
        model::{availability::Availability, reference::AvailabilityKey},
        service::availability::AvailabilityService,
        state::AppState,
        util::parse::{parse_entity, parse_place},
    },
};

/// Tag for grouping availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

fn parse_key(
    entity: &str,
    entity_id: &str,
    place: &str,
    place_id: &str,
) -> Result<AvailabilityKey, AppError> {
    Ok(AvailabilityKey::new(
        parse_entity(entity, entity_id)?,
        parse_place(place, place_id)?,
    ))
}

/// List the entity kinds that can be gated.
///
/// # Returns
/// - `200 OK` - Every allowed entity kind
#[utoipa::path(
    get,
    path = "/availability/entities",
    tag = AVAILABILITY_TAG,
    responses(
        (status = 200, description = "Allowed entity kinds", body = ApiResponse<Vec<EntityKind>>)
    ),
)]
pub async fn get_entities() -> impl IntoResponse {
    Json(ApiResponse::success(AvailabilityService::entities()))
}

/// List the place kinds an entity can be gated at.
///
/// # Returns
/// - `200 OK` - Every allowed place kind
#[utoipa::path(
    get,
    path = "/availability/places",
    tag = AVAILABILITY_TAG,
    responses(
        (status = 200, description = "Allowed place kinds", body = ApiResponse<Vec<PlaceKind>>)
    ),
)]
pub async fn get_places() -> impl IntoResponse {
    Json(ApiResponse::success(AvailabilityService::places()))
}

/// Enable or disable an entity at a place.
///
/// Creates the record on first write and overwrites the flag afterwards, so the
/// last write wins.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `entity` - Entity kind (`menu`, `category` or `product`)
/// - `entity_id` - Id of the gated entity
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
/// - `payload` - New flag (`enable`)
///
/// # Returns
/// - `200 OK` - The stored record
/// - `400 Bad Request` - Unknown kind, malformed id or malformed body
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    put,
    path = "/availability/{entity}/{entity_id}/{place}/{place_id}",
    tag = AVAILABILITY_TAG,
    params(
        ("entity" = EntityKind, Path, description = "Entity kind"),
        ("entity_id" = i32, Path, description = "Entity id"),
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id")
    ),
    request_body = SetAvailabilityDto,
    responses(
        (status = 200, description = "Availability stored", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Invalid kind, id or body", body = ErrorDto),
        (status = 422, description = "Could not set availability", body = ErrorDto)
    ),
)]
pub async fn set_availability(
    State(state): State<AppState>,
    Path((entity, entity_id, place, place_id)): Path<(String, String, String, String)>,
    payload: Result<Json<SetAvailabilityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let key = parse_key(&entity, &entity_id, &place, &place_id)?;
    let Json(payload) = payload?;

    let service = AvailabilityService::new(&state.db);

    let availability = service
        .enable_entity(key, payload.enable)
        .await
        .map_err(|e| key_args(e.context("Could not set availability"), &key))?;

    Ok(Json(ApiResponse::success(availability.into_dto())))
}

/// Get the availability of an entity at a place.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `entity` - Entity kind (`menu`, `category` or `product`)
/// - `entity_id` - Id of the gated entity
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
///
/// # Returns
/// - `200 OK` - The stored record
/// - `400 Bad Request` - Unknown kind or malformed id
/// - `404 Not Found` - The entity was never gated at the place
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/availability/{entity}/{entity_id}/{place}/{place_id}",
    tag = AVAILABILITY_TAG,
    params(
        ("entity" = EntityKind, Path, description = "Entity kind"),
        ("entity_id" = i32, Path, description = "Entity id"),
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Availability found", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 404, description = "No availability stored", body = ErrorDto),
        (status = 422, description = "Could not get availability", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path((entity, entity_id, place, place_id)): Path<(String, String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let key = parse_key(&entity, &entity_id, &place, &place_id)?;

    let service = AvailabilityService::new(&state.db);

    let availability = service
        .get(key)
        .await
        .map_err(|e| key_args(e.context("Could not get availability"), &key))?;

    Ok(Json(ApiResponse::success(availability.into_dto())))
}

/// Get the availability of one entity across every place of a kind.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `entity` - Entity kind (`menu`, `category` or `product`)
/// - `entity_id` - Id of the gated entity
/// - `place` - Place kind to list records for
///
/// # Returns
/// - `200 OK` - Stored records, empty when the entity was never gated
/// - `400 Bad Request` - Unknown kind or malformed id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/availability/{entity}/{entity_id}/{place}",
    tag = AVAILABILITY_TAG,
    params(
        ("entity" = EntityKind, Path, description = "Entity kind"),
        ("entity_id" = i32, Path, description = "Entity id"),
        ("place" = PlaceKind, Path, description = "Place kind")
    ),
    responses(
        (status = 200, description = "Availability records", body = ApiResponse<Vec<AvailabilityDto>>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 422, description = "Could not find availability", body = ErrorDto)
    ),
)]
pub async fn get_entity_availability(
    State(state): State<AppState>,
    Path((entity, entity_id, place)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let entity = parse_entity(&entity, &entity_id)?;
    let place_kind: PlaceKind = place.parse()?;

    let service = AvailabilityService::new(&state.db);

    let records = service
        .find_by_entity(entity, place_kind)
        .await
        .map_err(|e| {
            e.context("Could not find availability")
                .arg("entity", entity.kind)
                .arg("entity_id", entity.id)
                .arg("place", place_kind)
        })?;

    Ok(Json(ApiResponse::success(into_dtos(records))))
}

/// Get the availability of every entity of a kind at one place.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
/// - `entity` - Entity kind to list records for
///
/// # Returns
/// - `200 OK` - Stored records, empty when nothing of the kind is gated there
/// - `400 Bad Request` - Unknown kind or malformed id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/availability/place/{place}/{place_id}/{entity}",
    tag = AVAILABILITY_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id"),
        ("entity" = EntityKind, Path, description = "Entity kind")
    ),
    responses(
        (status = 200, description = "Availability records", body = ApiResponse<Vec<AvailabilityDto>>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 422, description = "Could not find availability", body = ErrorDto)
    ),
)]
pub async fn get_place_availability(
    State(state): State<AppState>,
    Path((place, place_id, entity)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;
    let entity_kind: EntityKind = entity.parse()?;

    let service = AvailabilityService::new(&state.db);

    let records = service
        .find_by_place(entity_kind, place)
        .await
        .map_err(|e| {
            e.context("Could not find availability")
                .arg("entity", entity_kind)
                .arg("place", place.kind)
                .arg("place_id", place.id)
        })?;

    Ok(Json(ApiResponse::success(into_dtos(records))))
}

/// Remove the availability of an entity at a place.
///
/// The entity reverts to enabled. Succeeds whether or not a record existed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `entity` - Entity kind (`menu`, `category` or `product`)
/// - `entity_id` - Id of the gated entity
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
///
/// # Returns
/// - `200 OK` - `true` once no record is left
/// - `400 Bad Request` - Unknown kind or malformed id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/availability/{entity}/{entity_id}/{place}/{place_id}",
    tag = AVAILABILITY_TAG,
    params(
        ("entity" = EntityKind, Path, description = "Entity kind"),
        ("entity_id" = i32, Path, description = "Entity id"),
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Availability removed", body = ApiResponse<bool>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 422, description = "Could not remove availability", body = ErrorDto)
    ),
)]
pub async fn remove_availability(
    State(state): State<AppState>,
    Path((entity, entity_id, place, place_id)): Path<(String, String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let key = parse_key(&entity, &entity_id, &place, &place_id)?;

    let service = AvailabilityService::new(&state.db);

    service
        .remove_entity(key)
        .await
        .map_err(|e| key_args(e.context("Could not remove availability"), &key))?;

    Ok(Json(ApiResponse::success(true)))
}

fn key_args(err: AppError, key: &AvailabilityKey) -> AppError {
    err.arg("entity", key.entity.kind)
        .arg("entity_id", key.entity.id)
        .arg("place", key.place.kind)
        .arg("place_id", key.place.id)
}

fn into_dtos(records: Vec<Availability>) -> Vec<AvailabilityDto> {
    records.into_iter().map(Availability::into_dto).collect()
}
