use super::*;

/// Tests creating and renaming a menu.
///
/// Expected: Ok with the new name and the original description
#[tokio::test]
async fn creates_and_updates_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;

    let repo = MenuRepository::new(db);
    let menu = repo
        .create(CreateMenuParams {
            name: "Breakfast".to_string(),
            description: "Morning menu".to_string(),
            brand_id: brand.id,
        })
        .await?;

    let updated = repo
        .update(UpdateMenuParams {
            id: menu.id,
            name: Some("Brunch".to_string()),
            description: None,
        })
        .await?;

    assert_eq!(updated.name, "Brunch");
    assert_eq!(updated.description, "Morning menu");
    assert_eq!(updated.brand_id, brand.id);

    Ok(())
}

/// Tests that a deleted menu is hidden from brand listings.
///
/// Expected: Ok with the remaining menu only
#[tokio::test]
async fn hides_deleted_menus() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let kept = factory::menu::create_menu(db, brand.id).await?;
    let dropped = factory::menu::create_menu(db, brand.id).await?;

    let repo = MenuRepository::new(db);
    repo.delete(dropped.id).await?;

    let menus = repo.find(Some(brand.id)).await?;
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].id, kept.id);

    Ok(())
}
