use super::*;

/// Tests the export read spans all users in a stable order.
///
/// Expected: Ok with rows ordered by user then boost
#[tokio::test]
async fn returns_all_users_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_boost(db).await?;
    let second = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-b", first.id, "B1").await?;
    factory::create_custom_name(db, "user-a", second.id, "A2").await?;
    factory::create_custom_name(db, "user-a", first.id, "A1").await?;

    let repo = BoostCustomNameRepository::new(db);
    let names: Vec<_> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|n| n.custom_name)
        .collect();

    assert_eq!(names, vec!["A1", "A2", "B1"]);

    Ok(())
}
