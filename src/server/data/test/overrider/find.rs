use super::*;

/// Tests filtering by product.
///
/// Expected: Ok with the product's active overrides only
#[tokio::test]
async fn filters_by_product() -> Result<(), DbErr> {
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
    let result = repo
        .find(OverriderFilter {
            product_id: Some(1),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = result.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests filtering by every field at once.
///
/// Expected: Ok with the single matching override
#[tokio::test]
async fn filters_by_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::overrider::create_overrider(db, 1, 5).await?;
    let target = factory::overrider::create_overrider(db, 1, 6).await?;

    let repo = OverriderRepository::new(db);
    let result = repo
        .find(OverriderFilter {
            product_id: Some(1),
            place_kind: Some(PlaceKind::Store),
            place_id: Some(6),
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, target.id);

    Ok(())
}

/// Tests an empty filter.
///
/// Expected: Ok with every active override
#[tokio::test]
async fn empty_filter_returns_all_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::overrider::create_overrider(db, 1, 5).await?;
    factory::overrider::create_overrider(db, 2, 6).await?;
    factory::overrider::OverriderFactory::new(db, 3, 7)
        .deleted()
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let result = repo.find(OverriderFilter::default()).await?;

    assert_eq!(result.len(), 2);

    Ok(())
}

/// Tests listing a store's overrides.
///
/// Expected: Ok with overrides of that store only
#[tokio::test]
async fn finds_by_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::overrider::create_overrider(db, 1, 5).await?;
    factory::overrider::create_overrider(db, 2, 5).await?;
    factory::overrider::create_overrider(db, 1, 6).await?;

    let repo = OverriderRepository::new(db);
    let result = repo.find_by_place(PlaceRef::store(5)).await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|o| o.place == PlaceRef::store(5)));

    let one = repo.find_one(2, PlaceRef::store(5)).await?;
    assert_eq!(one.map(|o| o.product_id), Some(2));
    assert!(repo.find_one(2, PlaceRef::store(6)).await?.is_none());

    Ok(())
}
