use super::*;

/// Tests changing a product's price.
///
/// Expected: Ok with the new price and other fields unchanged
#[tokio::test]
async fn updates_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::ProductFactory::new(db, brand.id)
        .name("Mocha")
        .price(3.0)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(UpdateProductParams {
            id: product.id,
            price: Some(3.5),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.price, 3.5);
    assert_eq!(updated.name, "Mocha");

    Ok(())
}

/// Tests clearing the discount with an explicit null.
///
/// Expected: Ok with `discount_id` None
#[tokio::test]
async fn clears_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::ProductFactory::new(db, brand.id)
        .discount_id(Some(2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(UpdateProductParams {
            id: product.id,
            discount_id: Some(None),
            ..Default::default()
        })
        .await?;

    assert!(updated.discount_id.is_none());

    Ok(())
}

/// Tests that a deleted product cannot be updated.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_deleted_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::create_product(db, brand.id).await?;

    let repo = ProductRepository::new(db);
    repo.delete(product.id).await?;

    let result = repo
        .update(UpdateProductParams {
            id: product.id,
            price: Some(1.0),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
