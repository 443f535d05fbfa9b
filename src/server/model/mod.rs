//! Domain models and operation parameters used inside the server.
//!
//! Entity models from the `entity` crate are converted here at the data layer
//! boundary so they never leak into services or controllers.

pub mod availability;
pub mod brand;
pub mod category;
pub mod menu;
pub mod overrider;
pub mod place;
pub mod product;
pub mod reference;
pub mod store;
