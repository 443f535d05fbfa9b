use super::*;

/// Tests the first write for a key.
///
/// Expected: Ok with a new record carrying the flag
#[tokio::test]
async fn inserts_new_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvailabilityRepository::new(db);
    let result = repo.upsert(menu_at_store(11, 5), false).await?;

    assert_eq!(result.entity, EntityRef::new(EntityKind::Menu, 11));
    assert_eq!(result.place, PlaceRef::store(5));
    assert!(!result.enable);

    Ok(())
}

/// Tests writing the same key twice.
///
/// Verifies the second write updates the existing row instead of adding one.
///
/// Expected: Ok with one row holding the last flag
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvailabilityRepository::new(db);
    let first = repo.upsert(menu_at_store(11, 5), true).await?;
    let second = repo.upsert(menu_at_store(11, 5), false).await?;

    assert_eq!(first.id, second.id);
    assert!(!second.enable);
    assert_eq!(second.created_at, first.created_at);

    let count = entity::prelude::Availability::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that keys differing only in entity kind are independent.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn keeps_entity_kinds_apart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvailabilityRepository::new(db);
    repo.upsert(menu_at_store(3, 5), false).await?;
    repo.upsert(
        AvailabilityKey::new(
            EntityRef::new(EntityKind::Product, 3),
            PlaceRef::store(5),
        ),
        true,
    )
    .await?;

    let count = entity::prelude::Availability::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
