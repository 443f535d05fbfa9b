use super::*;

/// Tests creating a brand.
///
/// Expected: Ok with the brand readable by id
#[tokio::test]
async fn creates_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let created = repo
        .create(CreateBrandParams {
            name: "Coffee Co".to_string(),
            description: "Coffee shops".to_string(),
            document: "12345678000190".to_string(),
            document_type: "cnpj".to_string(),
            social_name: "Coffee Company Ltd".to_string(),
            city: "Lisbon".to_string(),
        })
        .await?;

    assert_eq!(created.name, "Coffee Co");
    assert_eq!(created.city, "Lisbon");

    let fetched = repo.get(created.id).await?;
    assert_eq!(fetched.map(|b| b.id), Some(created.id));

    Ok(())
}

/// Tests listing brands.
///
/// Expected: Ok with every active brand
#[tokio::test]
async fn finds_all_brands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::brand::create_brand(db).await?;
    factory::brand::create_brand(db).await?;

    let repo = BrandRepository::new(db);
    let brands = repo.find_all().await?;

    assert_eq!(brands.len(), 2);

    Ok(())
}
