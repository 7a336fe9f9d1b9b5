use super::*;

/// Tests first login creates a non-admin profile.
///
/// Expected: Ok with email and display name copied from the identity
#[tokio::test]
async fn creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut caller = identity("user-1", Some("racer@example.com"));
    caller
        .user_metadata
        .insert("full_name".to_string(), json!("Racer One"));

    let repo = ProfileRepository::new(db);
    let profile = repo.upsert_from_identity(&caller).await?;

    assert_eq!(profile.id, "user-1");
    assert_eq!(profile.email.as_deref(), Some("racer@example.com"));
    assert_eq!(profile.display_name.as_deref(), Some("Racer One"));
    assert!(!profile.is_admin);

    Ok(())
}

/// Tests a later login refreshes the email and display name but never touches the admin flag.
///
/// Expected: Ok with new email and display name, and admin still true
#[tokio::test]
async fn preserves_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "admin-1").await?;

    let mut caller = identity("admin-1", Some("new@example.com"));
    caller
        .user_metadata
        .insert("display_name".to_string(), json!("Pit Boss"));

    let repo = ProfileRepository::new(db);
    let profile = repo.upsert_from_identity(&caller).await?;

    assert!(profile.is_admin);
    assert_eq!(profile.email.as_deref(), Some("new@example.com"));
    assert_eq!(profile.display_name.as_deref(), Some("Pit Boss"));

    Ok(())
}
