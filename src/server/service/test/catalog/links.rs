use super::*;

/// Tests linking a category into a menu of the same brand.
///
/// Expected: Ok with the category listed on the menu
#[tokio::test]
async fn adds_category_to_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let menu = factory::menu::create_menu(db, brand.id).await?;
    let category = factory::category::create_category(db, brand.id).await?;

    let service = MenuService::new(db);
    let linked = service.add_category(menu.id, category.id).await?;

    assert_eq!(linked.categories.len(), 1);
    assert_eq!(linked.categories[0].id, category.id);

    let unlinked = service.remove_category(menu.id, category.id).await?;
    assert!(unlinked.categories.is_empty());

    Ok(())
}

/// Tests linking a category of another brand.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_cross_brand_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let other = factory::brand::create_brand(db).await?;
    let menu = factory::menu::create_menu(db, brand.id).await?;
    let category = factory::category::create_category(db, other.id).await?;

    let result = MenuService::new(db).add_category(menu.id, category.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests linking a product of another brand into a category.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_cross_brand_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let other = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db, brand.id).await?;
    let product = factory::product::create_product(db, other.id).await?;

    let result = CategoryService::new(db)
        .add_product(category.id, product.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests linking and unlinking a product of the same brand.
///
/// Expected: Ok with the product listed, then an empty list
#[tokio::test]
async fn adds_and_removes_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db, brand.id).await?;
    let product = factory::product::create_product(db, brand.id).await?;

    let service = CategoryService::new(db);
    let linked = service.add_product(category.id, product.id).await?;
    assert_eq!(linked.products.len(), 1);

    let unlinked = service.remove_product(category.id, product.id).await?;
    assert!(unlinked.products.is_empty());

    Ok(())
}

/// Tests linking into a missing menu.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db, brand.id).await?;

    let result = MenuService::new(db).add_category(404, category.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
