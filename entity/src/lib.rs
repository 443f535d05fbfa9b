//! SeaORM entity models for the menu catalog and its per-place layers.

pub mod prelude;

pub mod availability;
pub mod brand;
pub mod category;
pub mod category_product;
pub mod menu;
pub mod menu_category;
pub mod overrider;
pub mod product;
pub mod store;
