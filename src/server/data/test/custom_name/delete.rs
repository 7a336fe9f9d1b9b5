use super::*;

/// Expected: Ok with the row gone
#[tokio::test]
async fn removes_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    factory::create_custom_name(db, "user-1", boost.id, "Gone").await?;

    let repo = BoostCustomNameRepository::new(db);
    repo.delete("user-1", boost.id).await?;

    assert!(repo.get_by_user("user-1").await?.is_empty());

    Ok(())
}

/// Tests deleting a name that was never set.
///
/// Expected: Ok
#[tokio::test]
async fn missing_name_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoostCustomNameRepository::new(db);

    assert!(repo.delete("user-1", 42).await.is_ok());

    Ok(())
}
