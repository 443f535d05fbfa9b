pub mod availability;
pub mod brand;
pub mod category;
pub mod menu;
pub mod overrider;
pub mod product;
pub mod store;
