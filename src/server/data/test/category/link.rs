use super::*;

/// Tests linking the same product twice.
///
/// Expected: Ok with a single link row
#[tokio::test]
async fn add_product_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db, brand.id).await?;
    let product = factory::product::create_product(db, brand.id).await?;

    let repo = CategoryRepository::new(db);
    repo.add_product(category.id, product.id).await?;
    repo.add_product(category.id, product.id).await?;

    let links = entity::prelude::CategoryProduct::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].product_id, product.id);

    Ok(())
}

/// Tests linking when another writer already inserted the same link.
///
/// Expected: Ok without touching the existing row
#[tokio::test]
async fn add_product_tolerates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    let existing = entity::prelude::CategoryProduct::find()
        .one(db)
        .await?
        .unwrap();

    CategoryRepository::new(db)
        .add_product(tree.category.id, tree.product.id)
        .await?;

    let links = entity::prelude::CategoryProduct::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, existing.id);

    Ok(())
}
