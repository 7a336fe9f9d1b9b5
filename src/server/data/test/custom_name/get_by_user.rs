use super::*;

/// Expected: Ok with only user-1's names
#[tokio::test]
async fn returns_only_user_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-1", boost.id, "Mine").await?;
    factory::create_custom_name(db, "user-2", boost.id, "Theirs").await?;

    let repo = BoostCustomNameRepository::new(db);
    let names = repo.get_by_user("user-1").await?;

    assert_eq!(names.len(), 1);
    assert_eq!(names[0].custom_name, "Mine");
    assert_eq!(names[0].boost_id, boost.id);

    Ok(())
}
