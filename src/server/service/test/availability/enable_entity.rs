use super::*;

/// Tests that `get` returns the last flag written.
///
/// Expected: Ok with enable false after true then false
#[tokio::test]
async fn get_returns_last_written_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AvailabilityService::new(db);
    let key = AvailabilityKey::new(EntityRef::new(EntityKind::Product, 3), PlaceRef::store(5));

    service.enable_entity(key, true).await?;
    service.enable_entity(key, false).await?;

    let availability = service.get(key).await?;
    assert!(!availability.enable);

    Ok(())
}

/// Tests reading a key that was never written.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_fails_for_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AvailabilityService::new(db);
    let key = AvailabilityKey::new(EntityRef::new(EntityKind::Menu, 1), PlaceRef::store(1));

    let result = service.get(key).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the listings by place and by entity.
///
/// Expected: Ok with the rows written through the service
#[tokio::test]
async fn lists_by_place_and_entity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AvailabilityService::new(db);
    let category = EntityRef::new(EntityKind::Category, 8);
    service
        .enable_entity(AvailabilityKey::new(category, PlaceRef::store(1)), false)
        .await?;
    service
        .enable_entity(AvailabilityKey::new(category, PlaceRef::store(2)), true)
        .await?;

    let by_entity = service.find_by_entity(category, PlaceKind::Store).await?;
    assert_eq!(by_entity.len(), 2);

    let by_place = service
        .find_by_place(EntityKind::Category, PlaceRef::store(1))
        .await?;
    assert_eq!(by_place.len(), 1);
    assert!(!by_place[0].enable);

    Ok(())
}

/// Tests the enumerations of allowed kinds.
#[test]
fn enumerates_kinds() {
    assert_eq!(
        AvailabilityService::entities(),
        vec![EntityKind::Menu, EntityKind::Category, EntityKind::Product]
    );
    assert_eq!(AvailabilityService::places(), vec![PlaceKind::Store]);
}
