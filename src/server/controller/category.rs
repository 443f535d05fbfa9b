use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        category::{CategoryDetailDto, CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        store::BrandFilterQuery,
    },
    server::{
        error::AppError,
        model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a category.
///
/// The referenced brand must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category fields
///
/// # Returns
/// - `201 Created` - The stored category
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Brand does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/category",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not create category", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = CategoryService::new(&state.db);

    let brand_id = payload.brand_id;

    let category = service
        .create(CreateCategoryParams::from_dto(payload))
        .await
        .map_err(|e| e.context("Could not create category").arg("brand_id", brand_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(category.into_dto())),
    ))
}

/// List categories, optionally restricted to one brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `brand_id` filter
///
/// # Returns
/// - `200 OK` - Active categories ordered by id
/// - `400 Bad Request` - Malformed `brand_id`
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/category",
    tag = CATEGORY_TAG,
    params(BrandFilterQuery),
    responses(
        (status = 200, description = "Category list", body = ApiResponse<Vec<CategoryDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 422, description = "Could not find categories", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    query: Result<Query<BrandFilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = CategoryService::new(&state.db);

    let categories = service
        .find(query.brand_id)
        .await
        .map_err(|e| {
            e.context("Could not find categories")
                .arg("brand_id", query.brand_id.map_or("any".to_string(), |id| id.to_string()))
        })?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok(Json(ApiResponse::success(categories)))
}

/// Get a category by id.
///
/// Includes the active products linked to the category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Category id
///
/// # Returns
/// - `200 OK` - The category
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Category does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryDetailDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Could not get category", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get category").arg("id", id))?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}

/// Partially update a category; absent fields keep their values.
///
/// `enable` is stored as catalog data; visibility at a place is decided by
/// availability records.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Category id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated category
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Category does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Could not update category", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = CategoryService::new(&state.db);

    let category = service
        .update(UpdateCategoryParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update category").arg("id", id))?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}

/// Soft-delete a category.
///
/// The category disappears from every menu that linked it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Category id
///
/// # Returns
/// - `200 OK` - The deleted category
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Category does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Could not delete category", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete category").arg("id", id))?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}

/// Link a product into a category.
///
/// Both must belong to the same brand. Linking an already linked product is a no-op.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Category id
/// - `product_id` - Product id
///
/// # Returns
/// - `200 OK` - The category with its products
/// - `400 Bad Request` - Malformed id or brands differ
/// - `404 Not Found` - Category or product does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/category/{id}/product/{product_id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category id"),
        ("product_id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product linked", body = ApiResponse<CategoryDetailDto>),
        (status = 400, description = "Invalid id or brand mismatch", body = ErrorDto),
        (status = 404, description = "Category or product not found", body = ErrorDto),
        (status = 422, description = "Could not add product to category", body = ErrorDto)
    ),
)]
pub async fn add_category_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let product_id = parse_id("product_id", &product_id)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .add_product(id, product_id)
        .await
        .map_err(|e| {
            e.context("Could not add product to category")
                .arg("id", id)
                .arg("product_id", product_id)
        })?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}

/// Unlink a product from a category.
///
/// Unlinking a product that is not linked succeeds.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Category id
/// - `product_id` - Product id
///
/// # Returns
/// - `200 OK` - The category with its remaining products
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Category does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/category/{id}/product/{product_id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category id"),
        ("product_id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product unlinked", body = ApiResponse<CategoryDetailDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Could not remove product from category", body = ErrorDto)
    ),
)]
pub async fn remove_category_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let product_id = parse_id("product_id", &product_id)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .remove_product(id, product_id)
        .await
        .map_err(|e| {
            e.context("Could not remove product from category")
                .arg("id", id)
                .arg("product_id", product_id)
        })?;

    Ok(Json(ApiResponse::success(category.into_dto())))
}
