use super::*;

/// Tests linking the same category twice.
///
/// Expected: Ok with a single link row
#[tokio::test]
async fn add_category_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let menu = factory::menu::create_menu(db, brand.id).await?;
    let category = factory::category::create_category(db, brand.id).await?;

    let repo = MenuRepository::new(db);
    repo.add_category(menu.id, category.id).await?;
    repo.add_category(menu.id, category.id).await?;

    let count = entity::prelude::MenuCategory::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests unlinking a category.
///
/// Expected: Ok(1) then Ok(0) for a repeated unlink
#[tokio::test]
async fn removes_category_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;

    let repo = MenuRepository::new(db);
    assert_eq!(repo.remove_category(tree.menu.id, tree.category.id).await?, 1);
    assert_eq!(repo.remove_category(tree.menu.id, tree.category.id).await?, 0);

    let categories = repo.categories_for_menus(&[tree.menu.id]).await?;
    assert!(categories.get(&tree.menu.id).is_none());

    Ok(())
}

/// Tests linking when another writer already inserted the same link.
///
/// Expected: Ok without touching the existing row
#[tokio::test]
async fn add_category_tolerates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;
    let existing = entity::prelude::MenuCategory::find().one(db).await?.unwrap();

    MenuRepository::new(db)
        .add_category(tree.menu.id, tree.category.id)
        .await?;

    let links = entity::prelude::MenuCategory::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, existing.id);

    Ok(())
}
