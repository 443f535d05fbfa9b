//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let brand = factory::create_brand(&db).await?;
//!     let store = factory::create_store(&db, brand.id).await?;
//!
//!     // Whole catalog tree for one brand
//!     let tree = factory::helpers::create_catalog_tree(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db, brand.id)
//!     .name("Espresso")
//!     .price(4.5)
//!     .build()
//!     .await?;
//! ```

pub mod availability;
pub mod brand;
pub mod category;
pub mod helpers;
pub mod menu;
pub mod overrider;
pub mod product;
pub mod store;

pub use availability::create_availability;
pub use brand::create_brand;
pub use category::create_category;
pub use helpers::{link_category_product, link_menu_category};
pub use menu::create_menu;
pub use overrider::create_overrider;
pub use product::create_product;
pub use store::create_store;
