use super::*;

/// Tests removing an existing record.
///
/// Expected: Ok(1) and the key reads back as absent
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "menu", 11, 5, false).await?;
    factory::availability::create_availability(db, "menu", 11, 6, false).await?;

    let repo = AvailabilityRepository::new(db);
    let removed = repo.delete(menu_at_store(11, 5)).await?;

    assert_eq!(removed, 1);
    assert!(repo.get(menu_at_store(11, 5)).await?.is_none());
    assert!(repo.get(menu_at_store(11, 6)).await?.is_some());

    Ok(())
}

/// Tests removing a key with no record.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvailabilityRepository::new(db);
    let removed = repo.delete(menu_at_store(11, 5)).await?;

    assert_eq!(removed, 0);

    Ok(())
}
