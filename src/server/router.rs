use axum::{
    http::HeaderValue,
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        availability::{
            get_availability, get_entities, get_entity_availability, get_place_availability,
            get_places, remove_availability, set_availability,
        },
        brand::{create_brand, delete_brand, get_brand, get_brands, update_brand},
        category::{
            add_category_product, create_category, delete_category, get_categories,
            get_category, remove_category_product, update_category,
        },
        health::health,
        menu::{
            add_menu_category, create_menu, delete_menu, get_menu, get_menus,
            remove_menu_category, update_menu,
        },
        overrider::{
            create_overrider, delete_overrider, get_overrider, get_overriders,
            get_place_overriders, get_product_overrider_field, update_all_product_overriders,
            update_overrider,
        },
        place::{get_place_category, get_place_menu, get_place_menus, get_place_product},
        product::{create_product, delete_product, get_product, get_products, update_product},
        store::{
            create_store, delete_store, get_brand_stores, get_store, get_stores, update_store,
        },
    },
    docs::ApiDoc,
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Every API route plus the Swagger UI, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/availability/entities", get(get_entities))
        .route("/availability/places", get(get_places))
        .route(
            "/availability/{entity}/{entity_id}/{place}/{place_id}",
            get(get_availability)
                .put(set_availability)
                .delete(remove_availability),
        )
        .route(
            "/availability/{entity}/{entity_id}/{place}",
            get(get_entity_availability),
        )
        .route(
            "/availability/place/{place}/{place_id}/{entity}",
            get(get_place_availability),
        )
        .route("/overrider", post(create_overrider).get(get_overriders))
        .route(
            "/overrider/{id}",
            get(get_overrider)
                .patch(update_overrider)
                .delete(delete_overrider),
        )
        .route(
            "/overrider/place/{place}/{place_id}",
            get(get_place_overriders),
        )
        .route("/place/{place}/{place_id}/menu", get(get_place_menus))
        .route("/place/{place}/{place_id}/menu/{id}", get(get_place_menu))
        .route(
            "/place/{place}/{place_id}/category/{id}",
            get(get_place_category),
        )
        .route(
            "/place/{place}/{place_id}/product/{id}",
            get(get_place_product),
        )
        .route("/brand", post(create_brand).get(get_brands))
        .route(
            "/brand/{id}",
            get(get_brand).patch(update_brand).delete(delete_brand),
        )
        .route("/brand/{id}/store", get(get_brand_stores))
        .route("/store", post(create_store).get(get_stores))
        .route(
            "/store/{id}",
            get(get_store).patch(update_store).delete(delete_store),
        )
        .route("/menu", post(create_menu).get(get_menus))
        .route(
            "/menu/{id}",
            get(get_menu).patch(update_menu).delete(delete_menu),
        )
        .route(
            "/menu/{id}/category/{category_id}",
            post(add_menu_category).delete(remove_menu_category),
        )
        .route("/category", post(create_category).get(get_categories))
        .route(
            "/category/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .route(
            "/category/{id}/product/{product_id}",
            post(add_category_product).delete(remove_category_product),
        )
        .route("/product", post(create_product).get(get_products))
        .route(
            "/product/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route(
            "/product/{id}/overrider",
            get(get_product_overrider_field),
        )
        .route(
            "/product/{id}/overrider/update-all",
            patch(update_all_product_overriders),
        )
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
}

/// Builds the application router with CORS and request tracing.
///
/// # Returns
/// - `Ok(Router)` - Router ready for state
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let cors = match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;

            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    Ok(routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
