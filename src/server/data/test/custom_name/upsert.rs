use super::*;

/// Tests setting a name twice keeps only the latest.
///
/// Expected: Ok with a single row holding the second name
#[tokio::test]
async fn replaces_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;

    let repo = BoostCustomNameRepository::new(db);
    repo.upsert("user-1", boost.id, "First".to_string()).await?;
    let stored = repo.upsert("user-1", boost.id, "Second".to_string()).await?;

    assert_eq!(stored.custom_name, "Second");

    let names = repo.get_by_user("user-1").await?;
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].custom_name, "Second");

    Ok(())
}
