use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        kind::PlaceKind,
        overrider::{
            CreateOverriderDto, OverriderDto, OverriderFieldQuery, OverriderFieldValueDto,
            OverriderQuery, UpdateAllOverridersDto, UpdateAllOverridersResultDto,
            UpdateOverriderDto,
        },
    },
    server::{
        error::AppError,
        model::overrider::{
            CreateOverriderParams, Overrider, OverriderFieldValue, OverriderFilter,
            UpdateOverriderParams,
        },
        service::overrider::OverriderService,
        state::AppState,
        util::parse::{parse_id, parse_place},
    },
};

/// Tag for grouping override endpoints in OpenAPI documentation
pub static OVERRIDER_TAG: &str = "overrider";

/// Create the override of a product at a place.
///
/// An existing override for the same product and place, including a deleted one,
/// is replaced instead of duplicated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Product, place and the fields to override; omitted fields fall
///   back to the product
///
/// # Returns
/// - `201 Created` - The stored override
/// - `400 Bad Request` - Malformed body or unknown place kind
/// - `404 Not Found` - Product does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    post,
    path = "/overrider",
    tag = OVERRIDER_TAG,
    request_body = CreateOverriderDto,
    responses(
        (status = 201, description = "Override created", body = ApiResponse<OverriderDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not create overrider", body = ErrorDto)
    ),
)]
pub async fn create_overrider(
    State(state): State<AppState>,
    payload: Result<Json<CreateOverriderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = OverriderService::new(&state.db);

    let params = CreateOverriderParams::from_dto(payload);
    let (product_id, place) = (params.product_id, params.place);

    let overrider = service.create(params).await.map_err(|e| {
        e.context("Could not create overrider")
            .arg("product_id", product_id)
            .arg("place", place.kind)
            .arg("place_id", place.id)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(overrider.into_dto())),
    ))
}

/// Find overrides by product and place.
///
/// Every query parameter is optional; unset ones match all overrides.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `product_id`, `place` and `place_id` filters
///
/// # Returns
/// - `200 OK` - Matching active overrides ordered by id
/// - `400 Bad Request` - Unknown place kind or malformed number
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/overrider",
    tag = OVERRIDER_TAG,
    params(OverriderQuery),
    responses(
        (status = 200, description = "Matching overrides", body = ApiResponse<Vec<OverriderDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 422, description = "Could not find overriders", body = ErrorDto)
    ),
)]
pub async fn get_overriders(
    State(state): State<AppState>,
    query: Result<Query<OverriderQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = OverriderService::new(&state.db);

    let filter = OverriderFilter::from_query(query);

    let overriders = service
        .find(filter.clone())
        .await
        .map_err(|e| {
            e.context("Could not find overriders")
                .arg("filter", format!("{:?}", filter))
        })?;

    Ok(Json(ApiResponse::success(into_dtos(overriders))))
}

/// Get an override by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Override id
///
/// # Returns
/// - `200 OK` - The override
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Override does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/overrider/{id}",
    tag = OVERRIDER_TAG,
    params(("id" = i32, Path, description = "Override id")),
    responses(
        (status = 200, description = "Override found", body = ApiResponse<OverriderDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Override not found", body = ErrorDto),
        (status = 422, description = "Could not get overrider", body = ErrorDto)
    ),
)]
pub async fn get_overrider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = OverriderService::new(&state.db);

    let overrider = service
        .get(id)
        .await
        .map_err(|e| e.context("Could not get overrider").arg("id", id))?;

    Ok(Json(ApiResponse::success(overrider.into_dto())))
}

/// Partially update an override.
///
/// Absent fields are left unchanged; an explicit `null` clears a field so the
/// product's own value applies again.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Override id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated override
/// - `400 Bad Request` - Malformed id or body
/// - `404 Not Found` - Override does not exist or was deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/overrider/{id}",
    tag = OVERRIDER_TAG,
    params(("id" = i32, Path, description = "Override id")),
    request_body = UpdateOverriderDto,
    responses(
        (status = 200, description = "Override updated", body = ApiResponse<OverriderDto>),
        (status = 400, description = "Invalid id or body", body = ErrorDto),
        (status = 404, description = "Override not found", body = ErrorDto),
        (status = 422, description = "Could not update overrider", body = ErrorDto)
    ),
)]
pub async fn update_overrider(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOverriderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let Json(payload) = payload?;

    let service = OverriderService::new(&state.db);

    let overrider = service
        .update(UpdateOverriderParams::from_dto(id, payload))
        .await
        .map_err(|e| e.context("Could not update overrider").arg("id", id))?;

    Ok(Json(ApiResponse::success(overrider.into_dto())))
}

/// Soft-delete an override.
///
/// The product's own values apply at the place again. Creating an override for the
/// same product and place later revives the row.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Override id
///
/// # Returns
/// - `200 OK` - The deleted override
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - Override does not exist or was already deleted
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    delete,
    path = "/overrider/{id}",
    tag = OVERRIDER_TAG,
    params(("id" = i32, Path, description = "Override id")),
    responses(
        (status = 200, description = "Override deleted", body = ApiResponse<OverriderDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Override not found", body = ErrorDto),
        (status = 422, description = "Could not delete overrider", body = ErrorDto)
    ),
)]
pub async fn delete_overrider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;

    let service = OverriderService::new(&state.db);

    let overrider = service
        .delete(id)
        .await
        .map_err(|e| e.context("Could not delete overrider").arg("id", id))?;

    Ok(Json(ApiResponse::success(overrider.into_dto())))
}

/// List the overrides at one place.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `place` - Place kind (`store`)
/// - `place_id` - Id of the place
///
/// # Returns
/// - `200 OK` - Active overrides at the place ordered by id
/// - `400 Bad Request` - Unknown place kind or malformed id
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/overrider/place/{place}/{place_id}",
    tag = OVERRIDER_TAG,
    params(
        ("place" = PlaceKind, Path, description = "Place kind"),
        ("place_id" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Overrides at the place", body = ApiResponse<Vec<OverriderDto>>),
        (status = 400, description = "Invalid kind or id", body = ErrorDto),
        (status = 422, description = "Could not find overriders", body = ErrorDto)
    ),
)]
pub async fn get_place_overriders(
    State(state): State<AppState>,
    Path((place, place_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let place = parse_place(&place, &place_id)?;

    let service = OverriderService::new(&state.db);

    let overriders = service
        .find_by_place(place)
        .await
        .map_err(|e| {
            e.context("Could not find overriders")
                .arg("place", place.kind)
                .arg("place_id", place.id)
        })?;

    Ok(Json(ApiResponse::success(into_dtos(overriders))))
}

/// List one field of every override of a product, per place.
///
/// A `null` value means the place falls back to the product for that field.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
/// - `query` - Field to list (`name`, `description`, `image`, `price` or `enable`)
///
/// # Returns
/// - `200 OK` - One entry per active override of the product
/// - `400 Bad Request` - Malformed id or unknown field
/// - `404 Not Found` - Product does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    get,
    path = "/product/{id}/overrider",
    tag = OVERRIDER_TAG,
    params(
        ("id" = i32, Path, description = "Product id"),
        OverriderFieldQuery
    ),
    responses(
        (status = 200, description = "Field value per override", body = ApiResponse<Vec<OverriderFieldValueDto>>),
        (status = 400, description = "Invalid id or field", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not find overriders", body = ErrorDto)
    ),
)]
pub async fn get_product_overrider_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<OverriderFieldQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let product_id = parse_id("id", &id)?;
    let Query(query) = query?;

    let service = OverriderService::new(&state.db);

    let overriders = service
        .get_overriders_by_field(product_id, query.field)
        .await
        .map_err(|e| {
            e.context("Could not find overriders")
                .arg("product_id", product_id)
                .arg("field", query.field.as_str())
        })?;

    let values: Vec<OverriderFieldValueDto> = overriders
        .into_iter()
        .map(|o| o.into_field_value_dto(query.field))
        .collect();

    Ok(Json(ApiResponse::success(values)))
}

/// Set one field on every override of a product.
///
/// The value must have the JSON type of the field: a string for text fields, a
/// number for price and a boolean for enable. `null` clears nullable fields.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
/// - `payload` - Field name and the value to write
///
/// # Returns
/// - `200 OK` - Number of overrides changed
/// - `400 Bad Request` - Malformed id, unknown field or value of the wrong type
/// - `404 Not Found` - Product does not exist
/// - `422 Unprocessable Entity` - Storage failure
#[utoipa::path(
    patch,
    path = "/product/{id}/overrider/update-all",
    tag = OVERRIDER_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateAllOverridersDto,
    responses(
        (status = 200, description = "Number of overrides updated", body = ApiResponse<UpdateAllOverridersResultDto>),
        (status = 400, description = "Invalid id, field or value", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Could not update overriders", body = ErrorDto)
    ),
)]
pub async fn update_all_product_overriders(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAllOverridersDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let product_id = parse_id("id", &id)?;
    let Json(payload) = payload?;
    let value = OverriderFieldValue::from_json(payload.field, payload.value)?;

    let service = OverriderService::new(&state.db);

    let updated = service
        .update_all_for_product(product_id, value)
        .await
        .map_err(|e| {
            e.context("Could not update overriders")
                .arg("product_id", product_id)
                .arg("field", payload.field.as_str())
        })?;

    tracing::info!(
        product_id,
        field = payload.field.as_str(),
        updated,
        "Updated overrides of product"
    );

    Ok(Json(ApiResponse::success(UpdateAllOverridersResultDto {
        updated,
    })))
}

fn into_dtos(overriders: Vec<Overrider>) -> Vec<OverriderDto> {
    overriders.into_iter().map(Overrider::into_dto).collect()
}
