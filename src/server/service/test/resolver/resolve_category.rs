use super::*;

/// Tests that disabled products are dropped from a category.
///
/// Expected: Ok(Some) with only the enabled product
#[tokio::test]
async fn drops_disabled_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    let hidden = factory::product::create_product(db, tree.brand.id).await?;
    factory::helpers::link_category_product(db, tree.category.id, hidden.id).await?;
    factory::availability::create_availability(db, "product", hidden.id, tree.store.id, false)
        .await?;

    let category = ResolverService::new(db)
        .resolve_category(tree.category.id, PlaceRef::store(tree.store.id))
        .await?
        .unwrap();

    let ids: Vec<i32> = category.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![tree.product.id]);

    Ok(())
}

/// Tests a category disabled at the store.
///
/// Expected: Ok(None)
#[tokio::test]
async fn disabled_category_resolves_to_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    factory::availability::create_availability(db, "category", tree.category.id, tree.store.id, false)
        .await?;

    let resolved = ResolverService::new(db)
        .resolve_category(tree.category.id, PlaceRef::store(tree.store.id))
        .await?;

    assert!(resolved.is_none());

    Ok(())
}
