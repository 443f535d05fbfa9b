use super::*;

/// Tests that a bulk price update touches exactly the listed rows.
///
/// Expected: Ok(2) with the third row unchanged
#[tokio::test]
async fn updates_only_listed_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::overrider::OverriderFactory::new(db, 1, 5)
        .price(Some(4.0))
        .build()
        .await?;
    let b = factory::overrider::OverriderFactory::new(db, 1, 6)
        .price(Some(4.0))
        .build()
        .await?;
    let c = factory::overrider::OverriderFactory::new(db, 1, 7)
        .price(Some(4.0))
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let updated = repo
        .update_field(&[a.id, b.id], OverriderFieldValue::Price(Some(9.99)))
        .await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.get(a.id).await?.unwrap().price, Some(9.99));
    assert_eq!(repo.get(b.id).await?.unwrap().price, Some(9.99));
    assert_eq!(repo.get(c.id).await?.unwrap().price, Some(4.0));

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok(0) with nothing changed
#[tokio::test]
async fn empty_ids_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::overrider::OverriderFactory::new(db, 1, 5)
        .name(Some("Keep"))
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let updated = repo
        .update_field(&[], OverriderFieldValue::Name(Some("Changed".to_string())))
        .await?;

    assert_eq!(updated, 0);
    assert_eq!(repo.get(a.id).await?.unwrap().name.as_deref(), Some("Keep"));

    Ok(())
}

/// Tests that soft-deleted rows are skipped even when listed.
///
/// Expected: Ok(1)
#[tokio::test]
async fn skips_deleted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::overrider::create_overrider(db, 1, 5).await?;
    let deleted = factory::overrider::OverriderFactory::new(db, 1, 6)
        .deleted()
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let updated = repo
        .update_field(&[active.id, deleted.id], OverriderFieldValue::Enable(false))
        .await?;

    assert_eq!(updated, 1);
    assert!(!repo.get(active.id).await?.unwrap().enable);

    Ok(())
}

/// Tests clearing a text field in bulk.
///
/// Expected: Ok with the field set to None
#[tokio::test]
async fn clears_field_with_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::overrider::OverriderFactory::new(db, 1, 5)
        .image(Some("old.png"))
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    repo.update_field(&[a.id], OverriderFieldValue::Image(None))
        .await?;

    assert!(repo.get(a.id).await?.unwrap().image.is_none());

    Ok(())
}
