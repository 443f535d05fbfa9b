use super::*;

/// Tests reading back a stored flag.
///
/// Expected: Ok(Some) with the stored flag
#[tokio::test]
async fn returns_stored_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "menu", 11, 5, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo.get(menu_at_store(11, 5)).await?;

    assert!(result.is_some());
    assert!(!result.unwrap().enable);

    Ok(())
}

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "menu", 11, 6, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo.get(menu_at_store(11, 5)).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a row whose stored entity kind is not a known value.
///
/// Expected: Err when the row is read
#[tokio::test]
async fn fails_on_unknown_stored_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "drink", 11, 5, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo.find_all_by_place(PlaceRef::store(5)).await;

    assert!(result.is_err());

    Ok(())
}
