use axum::{response::IntoResponse, Json};

use crate::model::api::ApiResponse;

pub static HEALTH_TAG: &str = "health";

/// Report that the service is up.
///
/// Does not touch the database.
///
/// # Returns
/// - `200 OK` - Always, with `"ok"` as data
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<String>)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::success("ok"))
}
