use super::*;

/// Tests collecting a product's override ids.
///
/// Expected: Ok with active ids of that product in id order
#[tokio::test]
async fn returns_active_ids_of_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::overrider::create_overrider(db, 1, 5).await?;
    let b = factory::overrider::create_overrider(db, 1, 6).await?;
    factory::overrider::create_overrider(db, 2, 5).await?;
    factory::overrider::OverriderFactory::new(db, 1, 7)
        .deleted()
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let ids = repo.get_ids_by_product(1).await?;

    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests a product without overrides.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_overrides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OverriderRepository::new(db);
    let ids = repo.get_ids_by_product(1).await?;

    assert!(ids.is_empty());

    Ok(())
}
