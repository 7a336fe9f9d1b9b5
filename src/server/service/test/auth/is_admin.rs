use super::*;

/// Expected: Ok(true) for an admin profile
#[tokio::test]
async fn admin_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "admin-1").await?;

    assert!(AuthService::new(db).is_admin(&identity("admin-1")).await?);

    Ok(())
}

/// Expected: Ok(false) for a regular profile and for no profile at all
#[tokio::test]
async fn non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_profile(db, "user-1").await?;
    let service = AuthService::new(db);

    assert!(!service.is_admin(&identity("user-1")).await?);
    assert!(!service.is_admin(&identity("nobody")).await?);

    Ok(())
}
