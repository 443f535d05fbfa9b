use super::*;

/// Tests disabling a store.
///
/// Expected: Ok with `enabled` false and other fields unchanged
#[tokio::test]
async fn updates_enabled_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let store = factory::store::StoreFactory::new(db, brand.id)
        .address("9 Side St")
        .build()
        .await?;

    let repo = StoreRepository::new(db);
    let updated = repo
        .update(UpdateStoreParams {
            id: store.id,
            enabled: Some(false),
            ..Default::default()
        })
        .await?;

    assert!(!updated.enabled);
    assert_eq!(updated.address, "9 Side St");
    assert_eq!(updated.name, store.name);

    Ok(())
}
