pub mod api;
pub mod availability;
pub mod brand;
pub mod category;
pub mod kind;
pub mod menu;
pub mod overrider;
pub mod place;
pub mod product;
pub mod store;
