use super::*;

/// Tests creating a store under a brand.
///
/// Expected: Ok with the store linked to the brand
#[tokio::test]
async fn creates_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;

    let repo = StoreRepository::new(db);
    let store = repo
        .create(CreateStoreParams {
            name: "Downtown".to_string(),
            brand_id: brand.id,
            enabled: true,
            image: "downtown.png".to_string(),
            latitude: 38.72,
            longitude: -9.14,
            address: "1 Main St".to_string(),
        })
        .await?;

    assert_eq!(store.brand_id, brand.id);
    assert_eq!(store.name, "Downtown");
    assert!(store.enabled);

    Ok(())
}
