//! HTTP handlers.
//!
//! Handlers parse path segments and bodies, call one service, and wrap the result in
//! the success envelope. Storage failures are tagged with a fixed per-operation
//! message before they reach the client.

pub mod availability;
pub mod brand;
pub mod category;
pub mod health;
pub mod menu;
pub mod overrider;
pub mod place;
pub mod product;
pub mod store;

#[cfg(test)]
mod test;
