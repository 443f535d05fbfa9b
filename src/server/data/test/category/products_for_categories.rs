use super::*;

/// Tests grouping products by category.
///
/// Expected: Ok with active products of each category ordered by id
#[tokio::test]
async fn groups_active_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db, brand.id).await?;
    let first = factory::product::create_product(db, brand.id).await?;
    let second = factory::product::create_product(db, brand.id).await?;
    let retired = factory::product::create_product(db, brand.id).await?;

    let repo = CategoryRepository::new(db);
    repo.add_product(category.id, second.id).await?;
    repo.add_product(category.id, first.id).await?;
    repo.add_product(category.id, retired.id).await?;
    repo.add_product(category.id, first.id).await?;

    crate::server::data::product::ProductRepository::new(db)
        .delete(retired.id)
        .await?;

    let result = repo.products_for_categories(&[category.id]).await?;

    let ids: Vec<i32> = result[&category.id].iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests unlinking a product.
///
/// Expected: Ok(1) and the category has no products left
#[tokio::test]
async fn removes_product_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_catalog_tree(db).await?;

    let repo = CategoryRepository::new(db);
    let removed = repo
        .remove_product(tree.category.id, tree.product.id)
        .await?;

    assert_eq!(removed, 1);
    assert!(repo
        .products_for_categories(&[tree.category.id])
        .await?
        .is_empty());

    Ok(())
}
