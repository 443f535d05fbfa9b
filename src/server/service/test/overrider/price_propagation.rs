use super::*;

/// Tests that changing a product's price rewrites its override prices.
///
/// Expected: Ok with every active override carrying the new price
#[tokio::test]
async fn product_price_change_updates_overrides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::create_product(db, brand.id).await?;
    let a = factory::overrider::OverriderFactory::new(db, product.id, 1)
        .price(Some(8.0))
        .build()
        .await?;
    let b = factory::overrider::OverriderFactory::new(db, product.id, 2)
        .name(Some("Kept"))
        .build()
        .await?;

    ProductService::new(db)
        .update(UpdateProductParams {
            id: product.id,
            price: Some(12.0),
            ..Default::default()
        })
        .await?;

    let overriders = OverriderService::new(db);
    assert_eq!(overriders.get(a.id).await?.price, Some(12.0));
    let b = overriders.get(b.id).await?;
    assert_eq!(b.price, Some(12.0));
    assert_eq!(b.name.as_deref(), Some("Kept"));

    Ok(())
}

/// Tests that an update without a price change leaves override prices alone.
///
/// Expected: Ok with the override price unchanged
#[tokio::test]
async fn unchanged_price_leaves_overrides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::create_product(db, brand.id).await?;
    let a = factory::overrider::OverriderFactory::new(db, product.id, 1)
        .price(Some(8.0))
        .build()
        .await?;

    ProductService::new(db)
        .update(UpdateProductParams {
            id: product.id,
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?;

    let overrider = OverriderService::new(db).get(a.id).await?;
    assert_eq!(overrider.price, Some(8.0));

    Ok(())
}
