use super::*;

fn params(item_id: i32, level: i32, card_count: i32) -> UpsertOwnershipParams {
    UpsertOwnershipParams {
        user_id: "user-1".to_string(),
        item_id,
        level,
        card_count,
    }
}

/// Expected: Ok with the tracked values and the catalog item attached
#[tokio::test]
async fn records_progression() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;

    let view = CatalogService::new(db)
        .upsert_ownership::<entity::boost::Entity>(params(boost.id, 5, 20))
        .await?;

    assert_eq!(view.item.id, boost.id);
    assert_eq!(view.item.name, boost.name);
    assert_eq!(
        view.ownership,
        Ownership::Tracked {
            level: 5,
            card_count: 20
        }
    );

    Ok(())
}

/// Expected: Err(AppError::ValidationErr) naming both fields
#[tokio::test]
async fn rejects_negative_values() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await.unwrap();

    let result = CatalogService::new(db)
        .upsert_ownership::<entity::boost::Entity>(params(boost.id, -1, -1))
        .await;

    let errors = match result {
        Err(AppError::ValidationErr(errors)) => errors,
        other => panic!("expected validation error, got {:?}", other),
    };
    let fields: Vec<_> = errors.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["level", "card_count"]);
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_item_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CatalogService::new(db)
        .upsert_ownership::<entity::driver::Entity>(params(42, 1, 1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
