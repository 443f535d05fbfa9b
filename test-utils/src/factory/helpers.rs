//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique names plus helpers that create linked
//! catalog structures in one call.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a category into a menu.
pub async fn link_menu_category(
    db: &DatabaseConnection,
    menu_id: i32,
    category_id: i32,
) -> Result<entity::menu_category::Model, DbErr> {
    entity::menu_category::ActiveModel {
        menu_id: ActiveValue::Set(menu_id),
        category_id: ActiveValue::Set(category_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a product into a category.
pub async fn link_category_product(
    db: &DatabaseConnection,
    category_id: i32,
    product_id: i32,
) -> Result<entity::category_product::Model, DbErr> {
    entity::category_product::ActiveModel {
        category_id: ActiveValue::Set(category_id),
        product_id: ActiveValue::Set(product_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Catalog rows created by [`create_catalog_tree`].
pub struct CatalogTree {
    pub brand: entity::brand::Model,
    pub store: entity::store::Model,
    pub menu: entity::menu::Model,
    pub category: entity::category::Model,
    pub product: entity::product::Model,
}

/// Creates a brand with one store and a menu -> category -> product chain.
///
/// All entities use factory defaults and are linked through the join tables.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(CatalogTree)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catalog_tree(db: &DatabaseConnection) -> Result<CatalogTree, DbErr> {
    let brand = crate::factory::brand::create_brand(db).await?;
    let store = crate::factory::store::create_store(db, brand.id).await?;
    let menu = crate::factory::menu::create_menu(db, brand.id).await?;
    let category = crate::factory::category::create_category(db, brand.id).await?;
    let product = crate::factory::product::create_product(db, brand.id).await?;

    link_menu_category(db, menu.id, category.id).await?;
    link_category_product(db, category.id, product.id).await?;

    Ok(CatalogTree {
        brand,
        store,
        menu,
        category,
        product,
    })
}

pub(crate) fn now() -> chrono::DateTime<Utc> {
    Utc::now()
}
