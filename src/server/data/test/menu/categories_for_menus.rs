use super::*;

/// Tests grouping categories by menu.
///
/// Verifies ordering by `sort_id` and that deleted categories are skipped.
///
/// Expected: Ok with each menu's active categories in sort order
#[tokio::test]
async fn groups_sorted_active_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let lunch = factory::menu::create_menu(db, brand.id).await?;
    let dinner = factory::menu::create_menu(db, brand.id).await?;
    let drinks = factory::category::CategoryFactory::new(db, brand.id)
        .sort_id(2)
        .build()
        .await?;
    let mains = factory::category::CategoryFactory::new(db, brand.id)
        .sort_id(1)
        .build()
        .await?;
    let retired = factory::category::create_category(db, brand.id).await?;

    factory::helpers::link_menu_category(db, lunch.id, drinks.id).await?;
    factory::helpers::link_menu_category(db, lunch.id, mains.id).await?;
    factory::helpers::link_menu_category(db, lunch.id, retired.id).await?;
    factory::helpers::link_menu_category(db, dinner.id, drinks.id).await?;

    crate::server::data::category::CategoryRepository::new(db)
        .delete(retired.id)
        .await?;

    let repo = MenuRepository::new(db);
    let result = repo.categories_for_menus(&[lunch.id, dinner.id]).await?;

    let lunch_ids: Vec<i32> = result[&lunch.id].iter().map(|c| c.id).collect();
    let dinner_ids: Vec<i32> = result[&dinner.id].iter().map(|c| c.id).collect();
    assert_eq!(lunch_ids, vec![mains.id, drinks.id]);
    assert_eq!(dinner_ids, vec![drinks.id]);

    Ok(())
}

/// Tests an empty menu id list.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn empty_ids_return_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);
    let result = repo.categories_for_menus(&[]).await?;

    assert!(result.is_empty());

    Ok(())
}
