use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        store::BrandFilterQuery,
    },
    server::{
        error::AppError,
        model::product::{CreateProductParams, Product, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Create a product.
///
/// The referenced brand must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Product fields
///
/// # Returns
/// - `201 Created` - The stored product
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Brand does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/product",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Could not create product", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ProductService::new(&state.db);

    let brand_id = payload.brand_id;

    let product = service
        .create(CreateProductParams::from_dto(payload))
        .await
        .map_err(|e| e.context("Could not create product").arg("brand_id", brand_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(product.into_dto())),
    ))
}

/// List products, optionally restricted to one brand.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `brand_id` filter
///
/// # Returns
/// - `200 OK` - Active products ordered by id
/// - `400 Bad Request` - Malformed `brand_id`
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/product",
    tag = PRODUCT_TAG,
    params(BrandFilterQuery),
    responses(
        (status = 200, description = "Product list", body = ApiResponse<Vec<ProductDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 422, description = "Could not find products", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    query: Result<Query<BrandFilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = ProductService::new(&state.db);

    let products = service
        .find(query.brand_id)
        .await
        .map_err(|e| {
            e.context("Could not find products")
                .arg("brand_id", query.brand_id.map_or("any".to_string(), |id| id.to_string()))
        })?;

    let products: Vec<ProductDto> = products.into_iter().map(Product::into_dto).collect();

    Ok(Json(ApiResponse::success(products)))
}

/// Get a product by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
///
/// # Returns
/// - `200 OK` - The product
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Product does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not get product", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = ProductService::new(&state.db);

    let product = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get product").arg("id", id))?;

    Ok(Json(ApiResponse::success(product.into_dto())))
}

/// Partially update a product; absent fields keep their values.
///
/// A price change is copied onto every active override of the product, so
/// stores that had their own price follow the new one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated product
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Product does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not update product", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = ProductService::new(&state.db);

    let product = service
        .update(UpdateProductParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update product").arg("id", id))?;

    Ok(Json(ApiResponse::success(product.into_dto())))
}

/// Soft-delete a product.
///
/// The product disappears from every category that linked it. Its overrides
/// are kept.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
///
/// # Returns
/// - `200 OK` - The deleted product
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Product does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not delete product", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = ProductService::new(&state.db);

    let product = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete product").arg("id", id))?;

    Ok(Json(ApiResponse::success(product.into_dto())))
}
