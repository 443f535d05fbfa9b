use super::*;

/// Tests listing one entity across stores.
///
/// Expected: Ok with one row per store ordered by store id
#[tokio::test]
async fn returns_entity_across_places() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "category", 4, 9, true).await?;
    factory::availability::create_availability(db, "category", 4, 2, false).await?;
    factory::availability::create_availability(db, "category", 5, 2, false).await?;
    factory::availability::create_availability(db, "product", 4, 2, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .find_by_entity(EntityRef::new(EntityKind::Category, 4), PlaceKind::Store)
        .await?;

    let places: Vec<(i32, bool)> = result.iter().map(|a| (a.place.id, a.enable)).collect();
    assert_eq!(places, vec![(2, false), (9, true)]);

    Ok(())
}

/// Tests an entity that was never gated.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_ungated_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .find_by_entity(EntityRef::new(EntityKind::Menu, 1), PlaceKind::Store)
        .await?;

    assert!(result.is_empty());

    Ok(())
}
