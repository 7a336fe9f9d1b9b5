use super::*;

/// Tests a request without identity is rejected.
///
/// Expected: Err(AuthError::Unauthorized)
#[tokio::test]
async fn rejects_missing_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db, None).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthorized))
    ));

    Ok(())
}

/// Tests an empty permission list only needs an identity.
///
/// Expected: Ok(Identity) even without a profile
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = identity("user-1");

    let result = AuthGuard::new(db, Some(&caller)).require(&[]).await?;

    assert_eq!(result.subject, "user-1");

    Ok(())
}

/// Tests admin profile passes the admin check.
///
/// Expected: Ok(Identity)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_admin(db, "admin-1").await?;
    let caller = identity("admin-1");

    let result = AuthGuard::new(db, Some(&caller))
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(result.subject, "admin-1");

    Ok(())
}

/// Tests non-admin profile is denied.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_profile(db, "user-1").await?;
    let caller = identity("user-1");

    let result = AuthGuard::new(db, Some(&caller))
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::Forbidden(subject, _))) => {
            assert_eq!(subject, "user-1");
        }
        other => panic!("Expected Forbidden, got: {:?}", other.map(|i| i.subject.clone())),
    }

    Ok(())
}

/// Tests identity without a profile is denied admin access.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn denies_identity_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = identity("ghost");

    let result = AuthGuard::new(db, Some(&caller))
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(..)))
    ));

    Ok(())
}

/// Tests a failed profile lookup denies rather than grants.
///
/// The profile table is deliberately missing so the lookup errors.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn denies_when_profile_lookup_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = identity("user-1");

    let result = AuthGuard::new(db, Some(&caller))
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(..)))
    ));

    Ok(())
}
