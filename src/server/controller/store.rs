use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        store::{BrandFilterQuery, CreateStoreDto, StoreDto, UpdateStoreDto},
    },
    server::{
        error::AppError,
        model::store::{CreateStoreParams, Store, UpdateStoreParams},
        service::store::StoreService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping store endpoints in OpenAPI documentation
pub static STORE_TAG: &str = "store";

/// Create a store.
///
/// The referenced brand must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Store fields
///
/// # Returns
/// - `201 Created` - The stored store
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Brand does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/store",
    tag = STORE_TAG,
    request_body = CreateStoreDto,
    responses(
        (status = 201, description = "Store created", body = ApiResponse<StoreDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not create store", body = ErrorDto)
    ),
)]
pub async fn create_store(
    State(state): State<AppState>,
    payload: Result<Json<CreateStoreDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StoreService::new(&state.db);

    let brand_id = payload.brand_id;

    let store = service
        .create(CreateStoreParams::from_dto(payload))
        .await
        .map_err(|e| e.context("Could not create store").arg("brand_id", brand_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(store.into_dto())),
    ))
}

/// List stores, optionally restricted to one brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `brand_id` filter
///
/// # Returns
/// - `200 OK` - Active stores ordered by id
/// - `400 Bad Request` - Malformed `brand_id`
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/store",
    tag = STORE_TAG,
    params(BrandFilterQuery),
    responses(
        (status = 200, description = "Store list", body = ApiResponse<Vec<StoreDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 422, description = "Could not find stores", body = ErrorDto)
    ),
)]
pub async fn get_stores(
    State(state): State<AppState>,
    query: Result<Query<BrandFilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = StoreService::new(&state.db);

    let stores = service
        .find(query.brand_id)
        .await
        .map_err(|e| {
            e.context("Could not find stores")
                .arg("brand_id", query.brand_id.map_or("any".to_string(), |id| id.to_string()))
        })?;

    let stores: Vec<StoreDto> = stores.into_iter().map(Store::into_dto).collect();

    Ok(Json(ApiResponse::success(stores)))
}

/// Get a store by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Store id
///
/// # Returns
/// - `200 OK` - The store
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Store does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/store/{id}",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store found", body = ApiResponse<StoreDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 422, description = "Could not get store", body = ErrorDto)
    ),
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = StoreService::new(&state.db);

    let store = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get store").arg("id", id))?;

    Ok(Json(ApiResponse::success(store.into_dto())))
}

/// Partially update a store; absent fields keep their values.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Store id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated store
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Store does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/store/{id}",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    request_body = UpdateStoreDto,
    responses(
        (status = 200, description = "Store updated", body = ApiResponse<StoreDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 422, description = "Could not update store", body = ErrorDto)
    ),
)]
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStoreDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = StoreService::new(&state.db);

    let store = service
        .update(UpdateStoreParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update store").arg("id", id))?;

    Ok(Json(ApiResponse::success(store.into_dto())))
}

/// Soft-delete a store.
///
/// Availability records and overrides at the store are left in place.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Store id
///
/// # Returns
/// - `200 OK` - The deleted store
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Store does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/store/{id}",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store deleted", body = ApiResponse<StoreDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 422, description = "Could not delete store", body = ErrorDto)
    ),
)]
pub async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = StoreService::new(&state.db);

    let store = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete store").arg("id", id))?;

    Ok(Json(ApiResponse::success(store.into_dto())))
}

/// List the stores of one brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Brand id
///
/// # Returns
/// - `200 OK` - Active stores of the brand ordered by id, empty for an unknown brand
/// - `400 Bad Request` - Malformed id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/brand/{id}/store",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Stores of the brand", body = ApiResponse<Vec<StoreDto>>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 422, description = "Could not find stores", body = ErrorDto)
    ),
)]
pub async fn get_brand_stores(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let brand_id = parse_id("id", &id)?;

    let service = StoreService::new(&state.db);

    let stores = service
        .find_by_brand(brand_id)
        .await
        .map_err(|e| e.context("Could not find stores").arg("brand_id", brand_id))?;

    let stores: Vec<StoreDto> = stores.into_iter().map(Store::into_dto).collect();

    Ok(Json(ApiResponse::success(stores)))
}
