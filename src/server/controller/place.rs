use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        kind::PlaceKind,
        place::{PlaceCategoryDto, PlaceMenuDto, PlaceProductDto},
    },
    server::{
        error::AppError,
        model::{place::PlaceMenu, reference::PlaceRef},
        service::resolver::ResolverService,
        state::AppState,
        util::parse::{parse_id, parse_place},
    },
};

/// Tag for grouping place-scoped catalog endpoints in OpenAPI documentation
pub static PLACE_TAG: &str = "place";

/// Get every enabled menu of the brand owning a store, merged for that store.
///
/// Menus, categories and products disabled at the store are left out and products
/// carry the store's override fields.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
///
/// # Returns
/// - `200 OK` - Merged menus
/// - `400 Bad Request` - Unknown place kind or malformed id
/// - `404 Not Found` - Store does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/place/{place}/{place_id}/menu",
    tag = PLACE_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Merged menus", body = ApiResponse<Vec<PlaceMenuDto>>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 422, description = "Could not resolve menus", body = ErrorDto)
    ),
)]
pub async fn get_place_menus(
    State(state): State<AppState>,
    Path((place, place_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;

    let service = ResolverService::new(&state.db);

    let menus = service
        .menus_for_place(place)
        .await
        .map_err(|e| place_args(e.context("Could not resolve menus"), place))?;

    let menus: Vec<PlaceMenuDto> = menus.into_iter().map(PlaceMenu::into_dto).collect();

    Ok(Json(ApiResponse::success(menus)))
}

/// Get one menu merged for a place.
///
/// Disabled categories and products inside it are left out.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
/// - `id` - Menu id
///
/// # Returns
/// - `200 OK` - The merged menu
/// - `400 Bad Request` - Unknown place kind or malformed id
/// - `404 Not Found` - Menu does not exist or is disabled at the place
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/place/{place}/{place_id}/menu/{id}",
    tag = PLACE_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id"),
        ("id" = i32, Path, description = "Menu id")
    ),
    responses(
        (status = 200, description = "Merged menu", body = ApiResponse<PlaceMenuDto>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 404, description = "Menu missing or disabled at the place", body = ErrorDto),
        (status = 422, description = "Could not resolve menu", body = ErrorDto)
    ),
)]
pub async fn get_place_menu(
    State(state): State<AppState>,
    Path((place, place_id, id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;
    let id = parse_id("id", &id)?;

    let service = ResolverService::new(&state.db);

    let menu = service
        .resolve_menu(id, place)
        .await
        .map_err(|e| place_args(e.context("Could not resolve menu"), place).arg("id", id))?
        .ok_or_else(|| not_available("Menu", id, place.kind, place.id))?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}

/// Get one category merged for a place.
///
/// Products disabled at the place are left out.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
/// - `id` - Category id
///
/// # Returns
/// - `200 OK` - The merged category
/// - `400 Bad Request` - Unknown place kind or malformed id
/// - `404 Not Found` - Category does not exist or is disabled at the place
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/place/{place}/{place_id}/category/{id}",
    tag = PLACE_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id"),
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Merged category", body = ApiResponse<PlaceCategoryDto>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 404, description = "Category missing or disabled at the place", body = ErrorDto),
        (status = 422, description = "Could not resolve category", body = ErrorDto)
    ),
)]
pub async fn get_place_category(
    State(state): State<AppState>,
    Path((place, place_id, id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;
    let id = parse_id("id", &id)?;

    let service = ResolverService::new(&state.db);

    let category = service
        .resolve_category(id, place)
        .await
        .map_err(|e| place_args(e.context("Could not resolve category"), place).arg("id", id))?
        .ok_or_else(|| not_available("Category", id, place.kind, place.id))?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}

/// Get one product merged for a place.
///
/// Override fields that are set replace the product's own values.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
/// - `id` - Product id
///
/// # Returns
/// - `200 OK` - The merged product
/// - `400 Bad Request` - Unknown place kind or malformed id
/// - `404 Not Found` - Product does not exist or is disabled at the place
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/place/{place}/{place_id}/product/{id}",
    tag = PLACE_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id"),
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Merged product", body = ApiResponse<PlaceProductDto>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 404, description = "Product missing or disabled at the place", body = ErrorDto),
        (status = 422, description = "Could not resolve product", body = ErrorDto)
    ),
)]
pub async fn get_place_product(
    State(state): State<AppState>,
    Path((place, place_id, id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;
    let id = parse_id("id", &id)?;

    let service = ResolverService::new(&state.db);

    let product = service
        .resolve_product(id, place)
        .await
        .map_err(|e| place_args(e.context("Could not resolve product"), place).arg("id", id))?
        .ok_or_else(|| not_available("Product", id, place.kind, place.id))?;

    Ok(Json(ApiResponse::success(product.into_dto())))
}

fn not_available(what: &str, id: i32, place: PlaceKind, place_id: i32) -> AppError {
    AppError::NotFound(format!(
        "{} {} is not available at {} {}",
        what, id, place, place_id
    ))
}

fn place_args(err: AppError, place: PlaceRef) -> AppError {
    err.arg("place", place.kind).arg("place_id", place.id)
}
