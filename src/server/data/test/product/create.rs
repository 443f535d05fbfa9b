use super::*;

/// Tests creating a product.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Espresso".to_string(),
            description: "Single shot".to_string(),
            image: "espresso.png".to_string(),
            sku: "ESP-1".to_string(),
            price: 2.5,
            unit: "cup".to_string(),
            color: "#3b2f2f".to_string(),
            discount_id: Some(4),
            brand_id: brand.id,
        })
        .await?;

    let fetched = repo.get(product.id).await?.unwrap();
    assert_eq!(fetched.name, "Espresso");
    assert_eq!(fetched.price, 2.5);
    assert_eq!(fetched.discount_id, Some(4));

    Ok(())
}
