use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        menu::{CreateMenuDto, MenuDetailDto, MenuDto, UpdateMenuDto},
        store::BrandFilterQuery,
    },
    server::{
        error::AppError,
        model::menu::{CreateMenuParams, Menu, UpdateMenuParams},
        service::menu::MenuService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Create a menu.
///
/// The referenced brand must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Menu fields
///
/// # Returns
/// - `201 Created` - The stored menu
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Brand does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/menu",
    tag = MENU_TAG,
    request_body = CreateMenuDto,
    responses(
        (status = 201, description = "Menu created", body = ApiResponse<MenuDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not create menu", body = ErrorDto)
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    payload: Result<Json<CreateMenuDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = MenuService::new(&state.db);

    let brand_id = payload.brand_id;

    let menu = service
        .create(CreateMenuParams::from_dto(payload))
        .await
        .map_err(|e| e.context("Could not create menu").arg("brand_id", brand_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(menu.into_dto())),
    ))
}

/// List menus, optionally restricted to one brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `brand_id` filter
///
/// # Returns
/// - `200 OK` - Active menus ordered by id
/// - `400 Bad Request` - Malformed `brand_id`
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/menu",
    tag = MENU_TAG,
    params(BrandFilterQuery),
    responses(
        (status = 200, description = "Menu list", body = ApiResponse<Vec<MenuDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 422, description = "Could not find menus", body = ErrorDto)
    ),
)]
pub async fn get_menus(
    State(state): State<AppState>,
    query: Result<Query<BrandFilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = MenuService::new(&state.db);

    let menus = service
        .find(query.brand_id)
        .await
        .map_err(|e| {
            e.context("Could not find menus")
                .arg("brand_id", query.brand_id.map_or("any".to_string(), |id| id.to_string()))
        })?;

    let menus: Vec<MenuDto> = menus.into_iter().map(Menu::into_dto).collect();

    Ok(Json(ApiResponse::success(menus)))
}

/// Get a menu by id.
///
/// Includes the active categories linked to the menu, ordered by `sort_id`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Menu id
///
/// # Returns
/// - `200 OK` - The menu
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Menu does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu found", body = ApiResponse<MenuDetailDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 422, description = "Could not get menu", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = MenuService::new(&state.db);

    let menu = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get menu").arg("id", id))?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}

/// Partially update a menu; absent fields keep their values.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Menu id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated menu
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Menu does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu id")),
    request_body = UpdateMenuDto,
    responses(
        (status = 200, description = "Menu updated", body = ApiResponse<MenuDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 422, description = "Could not update menu", body = ErrorDto)
    ),
)]
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMenuDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = MenuService::new(&state.db);

    let menu = service
        .update(UpdateMenuParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update menu").arg("id", id))?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}

/// Soft-delete a menu.
///
/// Links to categories are kept, but the menu no longer appears anywhere.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Menu id
///
/// # Returns
/// - `200 OK` - The deleted menu
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Menu does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu deleted", body = ApiResponse<MenuDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 422, description = "Could not delete menu", body = ErrorDto)
    ),
)]
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = MenuService::new(&state.db);

    let menu = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete menu").arg("id", id))?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}

/// Link a category into a menu.
///
/// Both must belong to the same brand. Linking an already linked category is a no-op.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Menu id
/// - `category_id` - Category id
///
/// # Returns
/// - `200 OK` - The menu with its categories
/// - `400 Bad Request` - Malformed id or brands differ
/// - `404 Not Found` - Menu or category does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/menu/{id}/category/{category_id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu id"),
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category linked", body = ApiResponse<MenuDetailDto>),
        (status = 400, description = "Invalid id or brand mismatch", body = ErrorDto),
        (status = 404, description = "Menu or category not found", body = ErrorDto),
        (status = 422, description = "Could not add category to menu", body = ErrorDto)
    ),
)]
pub async fn add_menu_category(
    State(state): State<AppState>,
    Path((id, category_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let category_id = parse_id("category_id", &category_id)?;

    let service = MenuService::new(&state.db);

    let menu = service
        .add_category(id, category_id)
        .await
        .map_err(|e| {
            e.context("Could not add category to menu")
                .arg("id", id)
                .arg("category_id", category_id)
        })?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}

/// Unlink a category from a menu.
///
/// Unlinking a category that is not linked succeeds.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Menu id
/// - `category_id` - Category id
///
/// # Returns
/// - `200 OK` - The menu with its remaining categories
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Menu does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/menu/{id}/category/{category_id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu id"),
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category unlinked", body = ApiResponse<MenuDetailDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 422, description = "Could not remove category from menu", body = ErrorDto)
    ),
)]
pub async fn remove_menu_category(
    State(state): State<AppState>,
    Path((id, category_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let category_id = parse_id("category_id", &category_id)?;

    let service = MenuService::new(&state.db);

    let menu = service
        .remove_category(id, category_id)
        .await
        .map_err(|e| {
            e.context("Could not remove category from menu")
                .arg("id", id)
                .arg("category_id", category_id)
        })?;

    Ok(Json(ApiResponse::success(menu.into_dto())))
}
