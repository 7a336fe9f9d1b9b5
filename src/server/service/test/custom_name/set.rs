use super::*;

/// Expected: Ok(Some) with the trimmed name, replaced on the second call
#[tokio::test]
async fn stores_trimmed_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    let service = CustomNameService::new(db);

    let stored = service.set("user-1", boost.id, "  Nitro ").await?;
    assert_eq!(stored.map(|n| n.custom_name), Some("Nitro".to_string()));

    service.set("user-1", boost.id, "Turbo").await?;
    let names = service.get_for_user(Some("user-1")).await;
    assert_eq!(names.get(&boost.id).map(String::as_str), Some("Turbo"));

    Ok(())
}

/// Expected: Ok(None) and the stored name removed
#[tokio::test]
async fn blank_name_clears() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-1", boost.id, "Nitro").await?;
    let service = CustomNameService::new(db);

    let cleared = service.set("user-1", boost.id, "   ").await?;

    assert!(cleared.is_none());
    assert!(service.get_for_user(Some("user-1")).await.is_empty());

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_boost_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomNameService::new(db).set("user-1", 7, "Ghost").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
