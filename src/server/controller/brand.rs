use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        brand::{BrandDto, CreateBrandDto, UpdateBrandDto},
    },
    server::{
        error::AppError,
        model::brand::{Brand, CreateBrandParams, UpdateBrandParams},
        service::brand::BrandService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brand";

/// Create a brand.
///
/// A brand owns stores, menus, categories and products.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Brand fields
///
/// # Returns
/// - `201 Created` - The stored brand
/// - `400 Bad Request` - Malformed body
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/brand",
    tag = BRAND_TAG,
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<BrandDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 422, description = "Could not create brand", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    payload: Result<Json<CreateBrandDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = BrandService::new(&state.db);

    let name = payload.name.clone();

    let brand = service
        .create(CreateBrandParams::from_dto(payload))
        .await
        .map_err(|e| e.context("Could not create brand").arg("name", name))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(brand.into_dto())),
    ))
}

/// List every brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Active brands ordered by id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/brand",
    tag = BRAND_TAG,
    responses(
        (status = 200, description = "Brand list", body = ApiResponse<Vec<BrandDto>>),
        (status = 422, description = "Could not find brands", body = ErrorDto)
    ),
)]
pub async fn get_brands(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db);

    let brands = service
        .find()
        .await
        .map_err(|e| e.context("Could not find brands"))?;

    let brands: Vec<BrandDto> = brands.into_iter().map(Brand::into_dto).collect();

    Ok(Json(ApiResponse::success(brands)))
}

/// Get a brand by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Brand id
///
/// # Returns
/// - `200 OK` - The brand
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Brand does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/brand/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand found", body = ApiResponse<BrandDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not get brand", body = ErrorDto)
    ),
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = BrandService::new(&state.db);

    let brand = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get brand").arg("id", id))?;

    Ok(Json(ApiResponse::success(brand.into_dto())))
}

/// Partially update a brand; absent fields keep their values.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Brand id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated brand
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Brand does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/brand/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = ApiResponse<BrandDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not update brand", body = ErrorDto)
    ),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBrandDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = BrandService::new(&state.db);

    let brand = service
        .update(UpdateBrandParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update brand").arg("id", id))?;

    Ok(Json(ApiResponse::success(brand.into_dto())))
}

/// Soft-delete a brand.
///
/// The row is kept with `deleted_at` set and no longer appears in listings.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Brand id
///
/// # Returns
/// - `200 OK` - The deleted brand
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Brand does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/brand/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand deleted", body = ApiResponse<BrandDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not delete brand", body = ErrorDto)
    ),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = BrandService::new(&state.db);

    let brand = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete brand").arg("id", id))?;

    Ok(Json(ApiResponse::success(brand.into_dto())))
}
