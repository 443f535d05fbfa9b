use super::*;

/// Tests listing one entity kind at one store.
///
/// Verifies rows for other kinds and other stores are excluded.
///
/// Expected: Ok with the matching rows ordered by entity id
#[tokio::test]
async fn returns_kind_at_place_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "menu", 2, 5, true).await?;
    factory::availability::create_availability(db, "menu", 1, 5, false).await?;
    factory::availability::create_availability(db, "product", 1, 5, false).await?;
    factory::availability::create_availability(db, "menu", 3, 6, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .find_by_place(EntityKind::Menu, PlaceRef::store(5))
        .await?;

    let ids: Vec<i32> = result.iter().map(|a| a.entity.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(result.iter().all(|a| a.entity.kind == EntityKind::Menu));

    Ok(())
}

/// Tests listing every kind at one store.
///
/// Expected: Ok with rows of all kinds for that store
#[tokio::test]
async fn returns_all_kinds_at_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_availability_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::availability::create_availability(db, "menu", 1, 5, true).await?;
    factory::availability::create_availability(db, "category", 1, 5, false).await?;
    factory::availability::create_availability(db, "product", 1, 5, false).await?;
    factory::availability::create_availability(db, "product", 1, 6, false).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo.find_all_by_place(PlaceRef::store(5)).await?;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|a| a.place == PlaceRef::store(5)));

    Ok(())
}
