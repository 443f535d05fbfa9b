//! Place-scoped view of the catalog.
//!
//! An entity is visible at a place unless an availability row disables it.
//! Products additionally take the non-empty fields of their override at that
//! place. The override's own `enable` column does not affect visibility.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::kind::EntityKind,
    server::{
        data::{
            availability::AvailabilityRepository, category::CategoryRepository,
            menu::MenuRepository, overrider::OverriderRepository, product::ProductRepository,
            store::StoreRepository,
        },
        error::AppError,
        model::{
            category::Category,
            menu::Menu,
            overrider::Overrider,
            place::{PlaceCategory, PlaceMenu, PlaceProduct},
            product::Product,
            reference::{AvailabilityKey, EntityRef, PlaceRef},
        },
    },
};

/// Resolves a stored availability flag; no row means enabled
pub fn is_enabled(flag: Option<bool>) -> bool {
    flag.unwrap_or(true)
}

/// Overlays an override on a product.
///
/// Text fields apply only when non-empty, `price` and `discount_id` whenever set.
pub fn merge_product(product: Product, overrider: Option<&Overrider>) -> PlaceProduct {
    let mut merged = PlaceProduct {
        id: product.id,
        name: product.name,
        description: product.description,
        image: product.image,
        sku: product.sku,
        price: product.price,
        unit: product.unit,
        color: product.color,
        discount_id: product.discount_id,
        brand_id: product.brand_id,
        overrider_id: None,
    };

    let Some(overrider) = overrider else {
        return merged;
    };

    merged.overrider_id = Some(overrider.id);

    if let Some(name) = non_empty(&overrider.name) {
        merged.name = name;
    }
    if let Some(description) = non_empty(&overrider.description) {
        merged.description = description;
    }
    if let Some(image) = non_empty(&overrider.image) {
        merged.image = image;
    }
    if let Some(price) = overrider.price {
        merged.price = price;
    }
    if let Some(discount_id) = overrider.discount_id {
        merged.discount_id = Some(discount_id);
    }

    merged
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Availability flags and overrides of a single place, loaded in two queries.
struct PlaceOverlay {
    flags: HashMap<(EntityKind, i32), bool>,
    overriders: HashMap<i32, Overrider>,
}

impl PlaceOverlay {
    async fn load(db: &DatabaseConnection, place: PlaceRef) -> Result<Self, AppError> {
        let flags = AvailabilityRepository::new(db)
            .find_all_by_place(place)
            .await?
            .into_iter()
            .map(|a| ((a.entity.kind, a.entity.id), a.enable))
            .collect();

        let overriders = OverriderRepository::new(db)
            .find_by_place(place)
            .await?
            .into_iter()
            .map(|o| (o.product_id, o))
            .collect();

        Ok(Self { flags, overriders })
    }

    fn enabled(&self, kind: EntityKind, id: i32) -> bool {
        is_enabled(self.flags.get(&(kind, id)).copied())
    }

    fn products(&self, products: Vec<Product>) -> Vec<PlaceProduct> {
        products
            .into_iter()
            .filter(|p| self.enabled(EntityKind::Product, p.id))
            .map(|p| {
                let overrider = self.overriders.get(&p.id);
                merge_product(p, overrider)
            })
            .collect()
    }
}

pub struct ResolverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResolverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a product as seen from a place
    ///
    /// # Returns
    /// - `Ok(Some(PlaceProduct))` - Product exists and is enabled at the place
    /// - `Ok(None)` - Product is missing or disabled at the place
    pub async fn resolve_product(
        &self,
        product_id: i32,
        place: PlaceRef,
    ) -> Result<Option<PlaceProduct>, AppError> {
        let Some(product) = ProductRepository::new(self.db).get(product_id).await? else {
            return Ok(None);
        };

        let key = AvailabilityKey::new(EntityRef::new(EntityKind::Product, product_id), place);
        let flag = AvailabilityRepository::new(self.db)
            .get(key)
            .await?
            .map(|a| a.enable);
        if !is_enabled(flag) {
            return Ok(None);
        }

        let overrider = OverriderRepository::new(self.db)
            .find_one(product_id, place)
            .await?;

        Ok(Some(merge_product(product, overrider.as_ref())))
    }

    /// Gets a category with its enabled, merged products as seen from a place
    pub async fn resolve_category(
        &self,
        category_id: i32,
        place: PlaceRef,
    ) -> Result<Option<PlaceCategory>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let Some(category) = repo.get(category_id).await? else {
            return Ok(None);
        };

        let overlay = PlaceOverlay::load(self.db, place).await?;
        if !overlay.enabled(EntityKind::Category, category.id) {
            return Ok(None);
        }

        let products = repo.products_for_categories(&[category.id]).await?;

        Ok(Some(place_category(&overlay, category, &products)))
    }

    /// Gets a menu with its enabled categories and products as seen from a place
    pub async fn resolve_menu(
        &self,
        menu_id: i32,
        place: PlaceRef,
    ) -> Result<Option<PlaceMenu>, AppError> {
        let Some(menu) = MenuRepository::new(self.db).get(menu_id).await? else {
            return Ok(None);
        };

        let overlay = PlaceOverlay::load(self.db, place).await?;
        if !overlay.enabled(EntityKind::Menu, menu.id) {
            return Ok(None);
        }

        let mut menus = self.resolve_menus(&overlay, vec![menu], place).await?;

        Ok(menus.pop())
    }

    /// Gets every enabled menu of the brand owning a store
    ///
    /// # Returns
    /// - `Ok(Vec<PlaceMenu>)` - Enabled menus with enabled children, merged
    /// - `Err(AppError::NotFound)` - Store does not exist
    pub async fn menus_for_place(&self, place: PlaceRef) -> Result<Vec<PlaceMenu>, AppError> {
        let store = StoreRepository::new(self.db)
            .get(place.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store with id {} not found", place.id)))?;

        let overlay = PlaceOverlay::load(self.db, place).await?;

        let menus: Vec<Menu> = MenuRepository::new(self.db)
            .find(Some(store.brand_id))
            .await?
            .into_iter()
            .filter(|m| overlay.enabled(EntityKind::Menu, m.id))
            .collect();

        let resolved = self.resolve_menus(&overlay, menus, place).await?;

        tracing::debug!(
            place = %place.kind,
            place_id = place.id,
            menus = resolved.len(),
            "Resolved menus for place"
        );

        Ok(resolved)
    }

    /// Builds place menus from already-enabled menus, loading children in bulk
    async fn resolve_menus(
        &self,
        overlay: &PlaceOverlay,
        menus: Vec<Menu>,
        place: PlaceRef,
    ) -> Result<Vec<PlaceMenu>, AppError> {
        let menu_ids: Vec<i32> = menus.iter().map(|m| m.id).collect();
        let mut categories = MenuRepository::new(self.db)
            .categories_for_menus(&menu_ids)
            .await?;

        let category_ids: Vec<i32> = categories
            .values()
            .flatten()
            .map(|c| c.id)
            .collect();
        let products = CategoryRepository::new(self.db)
            .products_for_categories(&category_ids)
            .await?;

        Ok(menus
            .into_iter()
            .map(|menu| {
                let place_categories = categories
                    .remove(&menu.id)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|c| overlay.enabled(EntityKind::Category, c.id))
                    .map(|c| place_category(overlay, c, &products))
                    .collect();

                PlaceMenu::new(menu, place, place_categories)
            })
            .collect())
    }
}

fn place_category(
    overlay: &PlaceOverlay,
    category: Category,
    products: &HashMap<i32, Vec<Product>>,
) -> PlaceCategory {
    // A category can sit in several menus, so its products are cloned rather than taken.
    let category_products = products.get(&category.id).cloned().unwrap_or_default();

    PlaceCategory::new(category, overlay.products(category_products))
}
