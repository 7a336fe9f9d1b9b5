use super::*;

/// Tests only the requested user's records are returned.
///
/// Expected: Ok with the single record belonging to user-1
#[tokio::test]
async fn returns_only_records_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ownership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = factory::create_boost(db).await?;
    factory::ownership::create_user_boost(db, "user-1", boost.id, 3, 7).await?;
    factory::ownership::create_user_boost(db, "user-2", boost.id, 9, 40).await?;

    let repo = OwnershipRepository::new(db);
    let records = repo.find_by_user(CatalogKind::Boost, "user-1").await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].item_id, boost.id);
    assert_eq!(records[0].level, 3);
    assert_eq!(records[0].card_count, 7);

    Ok(())
}

/// Tests records are kept separate per catalog.
///
/// Expected: Ok with driver records only when asking for drivers
#[tokio::test]
async fn reads_the_requested_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ownership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let part = factory::create_car_part(db).await?;
    factory::ownership::create_user_driver(db, "user-1", driver.id, 2, 5).await?;
    factory::ownership::create_user_car_part(db, "user-1", part.id, 1, 1).await?;

    let repo = OwnershipRepository::new(db);

    let drivers = repo.find_by_user(CatalogKind::Driver, "user-1").await?;
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].item_id, driver.id);

    let parts = repo.find_by_user(CatalogKind::CarPart, "user-1").await?;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].item_id, part.id);

    let boosts = repo.find_by_user(CatalogKind::Boost, "user-1").await?;
    assert!(boosts.is_empty());

    Ok(())
}

/// Expected: Ok with an empty list for a user without records
#[tokio::test]
async fn empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ownership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnershipRepository::new(db);
    let records = repo.find_by_user(CatalogKind::Driver, "nobody").await?;

    assert!(records.is_empty());

    Ok(())
}
