pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_brand_table;
mod m20260105_000002_create_store_table;
mod m20260105_000003_create_menu_table;
mod m20260105_000004_create_category_table;
mod m20260105_000005_create_product_table;
mod m20260105_000006_create_menu_category_table;
mod m20260105_000007_create_category_product_table;
mod m20260106_000008_create_availability_table;
mod m20260106_000009_create_overrider_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_brand_table::Migration),
            Box::new(m20260105_000002_create_store_table::Migration),
            Box::new(m20260105_000003_create_menu_table::Migration),
            Box::new(m20260105_000004_create_category_table::Migration),
            Box::new(m20260105_000005_create_product_table::Migration),
            Box::new(m20260105_000006_create_menu_category_table::Migration),
            Box::new(m20260105_000007_create_category_product_table::Migration),
            Box::new(m20260106_000008_create_availability_table::Migration),
            Box::new(m20260106_000009_create_overrider_table::Migration),
        ]
    }
}
