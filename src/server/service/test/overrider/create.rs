use super::*;

/// Tests creating an override for a missing product.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OverriderService::new(db);
    let result = service
        .create(CreateOverriderParams {
            product_id: 404,
            place: PlaceRef::store(1),
            name: None,
            description: None,
            image: None,
            price: Some(1.0),
            enable: true,
            discount_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests create, partial update and delete through the service.
///
/// Expected: price-only update keeps the name; get after delete is NotFound
#[tokio::test]
async fn create_update_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;

    let service = OverriderService::new(db);
    let created = service
        .create(CreateOverriderParams {
            product_id: tree.product.id,
            place: PlaceRef::store(tree.store.id),
            name: Some("Store Special".to_string()),
            description: None,
            image: None,
            price: None,
            enable: true,
            discount_id: None,
        })
        .await?;

    let updated = service
        .update(UpdateOverriderParams {
            id: created.id,
            price: Some(Some(9.99)),
            ..Default::default()
        })
        .await?;
    assert_eq!(updated.price, Some(9.99));
    assert_eq!(updated.name.as_deref(), Some("Store Special"));

    service.delete(created.id).await?;
    let result = service.get(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating an override that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_fails_for_missing_override() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OverriderService::new(db);
    let result = service
        .update(UpdateOverriderParams {
            id: 77,
            enable: Some(false),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
