use super::*;

/// Tests the place view of a whole brand.
///
/// Verifies disabled menus are dropped, enabled ones carry merged products, and
/// another store of the same brand is unaffected.
///
/// Expected: Ok with one menu at the gated store and two at the other
#[tokio::test]
async fn drops_disabled_menus_and_merges_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    let other_store = factory::store::create_store(db, tree.brand.id).await?;
    let closed = factory::menu::create_menu(db, tree.brand.id).await?;
    factory::helpers::link_menu_category(db, closed.id, tree.category.id).await?;

    factory::availability::create_availability(db, "menu", closed.id, tree.store.id, false).await?;
    factory::availability::create_availability(db, "menu", tree.menu.id, tree.store.id, true).await?;
    factory::overrider::OverriderFactory::new(db, tree.product.id, tree.store.id)
        .price(Some(1.25))
        .build()
        .await?;

    let service = ResolverService::new(db);
    let menus = service
        .menus_for_place(PlaceRef::store(tree.store.id))
        .await?;

    assert_eq!(menus.len(), 1);
    let menu = &menus[0];
    assert_eq!(menu.id, tree.menu.id);
    assert_eq!(menu.place, PlaceRef::store(tree.store.id));
    assert_eq!(menu.categories.len(), 1);
    assert_eq!(menu.categories[0].products.len(), 1);
    assert_eq!(menu.categories[0].products[0].price, 1.25);

    let other = service
        .menus_for_place(PlaceRef::store(other_store.id))
        .await?;
    assert_eq!(other.len(), 2);
    assert!(other
        .iter()
        .all(|m| m.categories[0].products[0].price == tree.product.price));

    Ok(())
}

/// Tests that menus of other brands are not listed.
///
/// Expected: Ok with the store brand's menu only
#[tokio::test]
async fn lists_only_store_brand_menus() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    let other_brand = factory::brand::create_brand(db).await?;
    factory::menu::create_menu(db, other_brand.id).await?;

    let menus = ResolverService::new(db)
        .menus_for_place(PlaceRef::store(tree.store.id))
        .await?;

    let ids: Vec<i32> = menus.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![tree.menu.id]);

    Ok(())
}

/// Tests an unknown store.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ResolverService::new(db)
        .menus_for_place(PlaceRef::store(999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests resolving a single disabled menu.
///
/// Expected: Ok(None)
#[tokio::test]
async fn disabled_menu_resolves_to_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    factory::availability::create_availability(db, "menu", tree.menu.id, tree.store.id, false).await?;

    let service = ResolverService::new(db);
    let resolved = service
        .resolve_menu(tree.menu.id, PlaceRef::store(tree.store.id))
        .await?;
    assert!(resolved.is_none());

    let elsewhere = service
        .resolve_menu(tree.menu.id, PlaceRef::store(tree.store.id + 1))
        .await?;
    assert_eq!(elsewhere.map(|m| m.categories.len()), Some(1));

    Ok(())
}
