use super::*;

/// Tests removing a key that has no record.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AvailabilityService::new(db);
    let key = AvailabilityKey::new(EntityRef::new(EntityKind::Menu, 11), PlaceRef::store(5));

    service.remove_entity(key).await?;

    Ok(())
}

/// Tests the full gate lifecycle for a menu at a real store.
///
/// Expected: enabled after writing, NotFound after removal
#[tokio::test]
async fn enable_then_remove_reverts_to_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let store = factory::store::create_store(db, brand.id).await?;

    let service = AvailabilityService::new(db);
    let key = AvailabilityKey::new(EntityRef::new(EntityKind::Menu, 11), PlaceRef::store(store.id));

    service.enable_entity(key, true).await?;
    assert!(service.get(key).await?.enable);

    service.remove_entity(key).await?;
    let result = service.get(key).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
