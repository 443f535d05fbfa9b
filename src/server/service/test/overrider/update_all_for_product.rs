use super::*;

/// Tests bulk-setting a field across a product's overrides.
///
/// Expected: Ok with every override of the product updated and others untouched
#[tokio::test]
async fn updates_every_override_of_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::create_product(db, brand.id).await?;
    let other = factory::product::create_product(db, brand.id).await?;
    factory::overrider::create_overrider(db, product.id, 1).await?;
    factory::overrider::create_overrider(db, product.id, 2).await?;
    let untouched = factory::overrider::create_overrider(db, other.id, 1).await?;

    let service = OverriderService::new(db);
    let updated = service
        .update_all_for_product(
            product.id,
            OverriderFieldValue::Name(Some("Seasonal".to_string())),
        )
        .await?;

    assert_eq!(updated, 2);

    let listed = service
        .get_overriders_by_field(product.id, OverriderField::Name)
        .await?;
    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .all(|o| o.name.as_deref() == Some("Seasonal")));

    assert!(service.get(untouched.id).await?.name.is_none());

    Ok(())
}

/// Tests bulk-setting a field on a product without overrides.
///
/// Expected: Ok(0)
#[tokio::test]
async fn no_overrides_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let product = factory::product::create_product(db, brand.id).await?;

    let service = OverriderService::new(db);
    let updated = service
        .update_all_for_product(product.id, OverriderFieldValue::Enable(false))
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests bulk-setting a field for a missing product.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OverriderService::new(db);
    let result = service
        .update_all_for_product(404, OverriderFieldValue::Price(Some(1.0)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
