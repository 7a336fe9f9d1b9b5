use super::*;

/// Expected: Ok(Some) with the admin flag preserved
#[tokio::test]
async fn finds_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "admin-1").await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.find_by_id("admin-1").await?.unwrap();

    assert_eq!(profile.id, "admin-1");
    assert!(profile.is_admin);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    assert!(repo.find_by_id("nobody").await?.is_none());

    Ok(())
}
