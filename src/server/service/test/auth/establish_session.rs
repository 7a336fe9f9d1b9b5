use super::*;

/// Expected: Ok with a new profile and the identity stored in the session
#[tokio::test]
async fn creates_profile_and_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let profile = AuthService::new(db)
        .establish_session(session, &identity("user-1"))
        .await?;

    assert_eq!(profile.id, "user-1");
    assert!(!profile.is_admin);
    assert_eq!(
        AuthSession::new(session).get_identity().await?,
        Some(identity("user-1"))
    );

    Ok(())
}

/// Tests logging in again never revokes admin.
///
/// Expected: Ok with is_admin still true
#[tokio::test]
async fn keeps_admin_flag() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_admin(db, "admin-1").await?;

    let profile = AuthService::new(db)
        .establish_session(session, &identity("admin-1"))
        .await?;

    assert!(profile.is_admin);

    Ok(())
}
