use super::*;

/// Tests updating only the price.
///
/// Verifies the other overridable fields keep their values.
///
/// Expected: Ok with the new price and untouched text fields
#[tokio::test]
async fn price_only_update_keeps_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::overrider::OverriderFactory::new(db, 1, 5)
        .name(Some("Store Latte"))
        .description(Some("Made with oat milk"))
        .image(Some("latte.png"))
        .price(Some(4.5))
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let updated = repo
        .update(UpdateOverriderParams {
            id: created.id,
            price: Some(Some(5.25)),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.price, Some(5.25));
    assert_eq!(updated.name.as_deref(), Some("Store Latte"));
    assert_eq!(updated.description.as_deref(), Some("Made with oat milk"));
    assert_eq!(updated.image.as_deref(), Some("latte.png"));

    Ok(())
}

/// Tests clearing a field with an explicit null.
///
/// Expected: Ok with the field reset to None
#[tokio::test]
async fn clears_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::overrider::OverriderFactory::new(db, 1, 5)
        .name(Some("Store Latte"))
        .discount_id(Some(3))
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let updated = repo
        .update(UpdateOverriderParams {
            id: created.id,
            name: Some(None),
            discount_id: Some(None),
            ..Default::default()
        })
        .await?;

    assert!(updated.name.is_none());
    assert!(updated.discount_id.is_none());

    Ok(())
}

/// Tests updating a soft-deleted override.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_deleted_override() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_overrider_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::overrider::OverriderFactory::new(db, 1, 5)
        .deleted()
        .build()
        .await?;

    let repo = OverriderRepository::new(db);
    let result = repo
        .update(UpdateOverriderParams {
            id: deleted.id,
            enable: Some(false),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
