use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (and any unique indexes the code under test relies on),
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Brand, Store};
///
/// let test = TestBuilder::new()
///     .with_table(Brand)
///     .with_table(Store)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables are created in the order they were added.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// Upserts resolve conflicts against unique indexes, which entity-derived
    /// table statements do not carry.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the availability table with its natural-key unique index.
    pub fn with_availability_table(self) -> Self {
        use entity::availability::Column;

        self.with_table(Availability).with_index(
            Index::create()
                .name("idx_availability_natural_key")
                .table(Availability)
                .col(Column::EntityKind)
                .col(Column::EntityId)
                .col(Column::PlaceKind)
                .col(Column::PlaceId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the overrider table with its natural-key unique index.
    pub fn with_overrider_table(self) -> Self {
        use entity::overrider::Column;

        self.with_table(Overrider).with_index(
            Index::create()
                .name("idx_overrider_natural_key")
                .table(Overrider)
                .col(Column::ProductId)
                .col(Column::PlaceKind)
                .col(Column::PlaceId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds every catalog table plus the link tables between them.
    ///
    /// Tables are added in dependency order:
    /// - Brand
    /// - Store
    /// - Menu
    /// - Category
    /// - Product
    /// - MenuCategory
    /// - CategoryProduct
    pub fn with_catalog_tables(self) -> Self {
        use entity::{category_product, menu_category};

        self.with_table(Brand)
            .with_table(Store)
            .with_table(Menu)
            .with_table(Category)
            .with_table(Product)
            .with_table(MenuCategory)
            .with_table(CategoryProduct)
            .with_index(
                Index::create()
                    .name("idx_menu_category_unique")
                    .table(MenuCategory)
                    .col(menu_category::Column::MenuId)
                    .col(menu_category::Column::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_category_product_unique")
                    .table(CategoryProduct)
                    .col(category_product::Column::CategoryId)
                    .col(category_product::Column::ProductId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table the service uses: catalog, availability and overrides.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_catalog_tables()
            .with_availability_table()
            .with_overrider_table()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
