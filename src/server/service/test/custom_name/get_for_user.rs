use super::*;

/// Expected: empty map without a user
#[tokio::test]
async fn anonymous_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-1", boost.id, "Nitro").await?;

    let names = CustomNameService::new(db).get_for_user(None).await;

    assert!(names.is_empty());

    Ok(())
}

/// Expected: only the requested user's names
#[tokio::test]
async fn returns_names_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_boost(db).await?;
    let second = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-1", first.id, "Nitro").await?;
    factory::create_custom_name(db, "user-1", second.id, "Shield").await?;
    factory::create_custom_name(db, "user-2", first.id, "Other").await?;

    let names = CustomNameService::new(db).get_for_user(Some("user-1")).await;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&first.id).map(String::as_str), Some("Nitro"));
    assert_eq!(names.get(&second.id).map(String::as_str), Some("Shield"));

    Ok(())
}

/// Tests a failed lookup degrades to an empty map.
///
/// Expected: empty map when the custom name table is missing
#[tokio::test]
async fn lookup_failure_is_empty() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let names = CustomNameService::new(db).get_for_user(Some("user-1")).await;

    assert!(names.is_empty());
}
