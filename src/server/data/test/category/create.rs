use super::*;

/// Tests creating a category and changing its sort position.
///
/// Expected: Ok with the new sort id and the rest unchanged
#[tokio::test]
async fn creates_and_updates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Drinks".to_string(),
            description: "Hot and cold".to_string(),
            image: "drinks.png".to_string(),
            color: "#00ff00".to_string(),
            sort_id: 3,
            enable: true,
            brand_id: brand.id,
        })
        .await?;

    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            sort_id: Some(1),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.sort_id, 1);
    assert_eq!(updated.name, "Drinks");
    assert_eq!(updated.color, "#00ff00");

    let by_brand = repo.find(Some(brand.id)).await?;
    assert_eq!(by_brand.len(), 1);

    Ok(())
}
