use super::*;

/// Tests creating a store under a missing brand.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn store_requires_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StoreService::new(db)
        .create(CreateStoreParams {
            name: "Orphan".to_string(),
            brand_id: 404,
            enabled: true,
            image: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a menu under a soft-deleted brand.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn menu_requires_active_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brands = BrandService::new(db);
    let brand = brands
        .create(CreateBrandParams {
            name: "Closing".to_string(),
            description: String::new(),
            document: String::new(),
            document_type: String::new(),
            social_name: String::new(),
            city: String::new(),
        })
        .await?;
    brands.delete(brand.id).await?;

    let result = MenuService::new(db)
        .create(CreateMenuParams {
            name: "Late".to_string(),
            description: String::new(),
            brand_id: brand.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing the stores of a brand.
///
/// Expected: Ok with that brand's stores only
#[tokio::test]
async fn finds_stores_by_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let other = factory::brand::create_brand(db).await?;
    factory::store::create_store(db, brand.id).await?;
    factory::store::create_store(db, other.id).await?;

    let stores = StoreService::new(db).find_by_brand(brand.id).await?;

    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].brand_id, brand.id);

    Ok(())
}
