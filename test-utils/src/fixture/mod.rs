//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of pure logic such as
//! override merging. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let product = fixture::product::entity();
//! let overrider = fixture::overrider::entity_builder()
//!     .price(Some(12.0))
//!     .build();
//! ```

pub mod overrider;
pub mod product;

pub use overrider::{entity as overrider_entity, entity_builder as overrider_entity_builder};
pub use product::{entity as product_entity, entity_builder as product_entity_builder};
