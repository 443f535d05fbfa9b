use super::*;

/// Tests soft-deleting a brand.
///
/// Expected: Ok with the row kept but hidden from reads
#[tokio::test]
async fn soft_deletes_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;

    let repo = BrandRepository::new(db);
    repo.delete(brand.id).await?;

    assert!(repo.get(brand.id).await?.is_none());
    assert!(repo.find_all().await?.is_empty());

    let row = entity::prelude::Brand::find_by_id(brand.id).one(db).await?;
    assert!(row.unwrap().deleted_at.is_some());

    Ok(())
}
