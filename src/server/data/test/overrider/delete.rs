use super::*;

/// Tests soft-deleting an override.
///
/// Verifies the row stays in the table but disappears from reads.
///
/// Expected: Ok with the deleted override
#[tokio::test]
async fn soft_deletes_override() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::overrider::create_overrider(db, 1, 5).await?;

    let repo = OverriderRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert_eq!(deleted.id, created.id);
    assert!(repo.get(created.id).await?.is_none());
    assert!(repo.find(OverriderFilter::default()).await?.is_empty());

    let count = entity::prelude::Overrider::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting twice.
///
/// Expected: Err(DbErr::RecordNotFound) on the second delete
#[tokio::test]
async fn fails_when_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::overrider::create_overrider(db, 1, 5).await?;

    let repo = OverriderRepository::new(db);
    repo.delete(created.id).await?;
    let result = repo.delete(created.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
