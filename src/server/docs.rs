use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ResponseStatus},
        availability::{AvailabilityDto, SetAvailabilityDto},
        brand::{BrandDto, CreateBrandDto, UpdateBrandDto},
        category::{CategoryDetailDto, CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        kind::{EntityKind, PlaceKind},
        menu::{CreateMenuDto, MenuDetailDto, MenuDto, UpdateMenuDto},
        overrider::{
            CreateOverriderDto, OverriderDto, OverriderField, OverriderFieldValueDto,
            UpdateAllOverridersDto, UpdateAllOverridersResultDto, UpdateOverriderDto,
        },
        place::{PlaceCategoryDto, PlaceMenuDto, PlaceProductDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        store::{CreateStoreDto, StoreDto, UpdateStoreDto},
    },
    server::controller::{
        availability, brand, category, health, menu, overrider, place, product, store,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menu API",
        description = "Catalog management with per-store availability and overrides",
    ),
    paths(
        health::health,
        availability::get_entities,
        availability::get_places,
        availability::set_availability,
        availability::get_availability,
        availability::get_entity_availability,
        availability::get_place_availability,
        availability::remove_availability,
        overrider::create_overrider,
        overrider::get_overriders,
        overrider::get_overrider,
        overrider::update_overrider,
        overrider::delete_overrider,
        overrider::get_place_overriders,
        overrider::get_product_overrider_field,
        overrider::update_all_product_overriders,
        place::get_place_menus,
        place::get_place_menu,
        place::get_place_category,
        place::get_place_product,
        brand::create_brand,
        brand::get_brands,
        brand::get_brand,
        brand::update_brand,
        brand::delete_brand,
        store::create_store,
        store::get_stores,
        store::get_store,
        store::update_store,
        store::delete_store,
        store::get_brand_stores,
        menu::create_menu,
        menu::get_menus,
        menu::get_menu,
        menu::update_menu,
        menu::delete_menu,
        menu::add_menu_category,
        menu::remove_menu_category,
        category::create_category,
        category::get_categories,
        category::get_category,
        category::update_category,
        category::delete_category,
        category::add_category_product,
        category::remove_category_product,
        product::create_product,
        product::get_products,
        product::get_product,
        product::update_product,
        product::delete_product,
    ),
    components(
        schemas(
            ResponseStatus,
            ErrorDto,
            EntityKind,
            PlaceKind,
            AvailabilityDto,
            SetAvailabilityDto,
            OverriderField,
            OverriderDto,
            CreateOverriderDto,
            UpdateOverriderDto,
            OverriderFieldValueDto,
            UpdateAllOverridersDto,
            UpdateAllOverridersResultDto,
            PlaceMenuDto,
            PlaceCategoryDto,
            PlaceProductDto,
            BrandDto,
            CreateBrandDto,
            UpdateBrandDto,
            StoreDto,
            CreateStoreDto,
            UpdateStoreDto,
            MenuDto,
            MenuDetailDto,
            CreateMenuDto,
            UpdateMenuDto,
            CategoryDto,
            CategoryDetailDto,
            CreateCategoryDto,
            UpdateCategoryDto,
            ProductDto,
            CreateProductDto,
            UpdateProductDto,
        )
    ),
    tags(
        (name = health::HEALTH_TAG, description = "Liveness"),
        (name = availability::AVAILABILITY_TAG, description = "Per-place enable flags"),
        (name = overrider::OVERRIDER_TAG, description = "Per-place product overrides"),
        (name = place::PLACE_TAG, description = "Catalog as seen from one place"),
        (name = brand::BRAND_TAG, description = "Brands"),
        (name = store::STORE_TAG, description = "Stores"),
        (name = menu::MENU_TAG, description = "Menus"),
        (name = category::CATEGORY_TAG, description = "Categories"),
        (name = product::PRODUCT_TAG, description = "Products"),
    )
)]
pub struct ApiDoc;
