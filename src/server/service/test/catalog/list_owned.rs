use super::*;

/// Tests totals cover the whole filtered catalog, not just owned items.
///
/// Expected: Ok with 45 total, 3 pages, and only the owned boost tracked
#[tokio::test]
async fn totals_include_unowned_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boosts = factory::helpers::create_boosts(db, 45).await?;
    factory::ownership::create_user_boost(db, "user-1", boosts[0].id, 2, 5).await?;

    let page = CatalogService::new(db)
        .list_owned::<entity::boost::Entity>("user-1", &CatalogQuery::default())
        .await?;

    assert_eq!(page.total, 45);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 20);
    assert_eq!(
        page.items[0].ownership,
        Ownership::Tracked {
            level: 2,
            card_count: 5
        }
    );
    assert!(page.items[1..]
        .iter()
        .all(|view| view.ownership == Ownership::Unowned));

    Ok(())
}

/// Tests ownership for one catalog type never leaks into another.
///
/// Expected: Ok with the car part unowned despite a driver record with the same id
#[tokio::test]
async fn scopes_ownership_to_catalog_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;
    let part = factory::create_car_part(db).await?;
    assert_eq!(driver.id, part.id);
    factory::ownership::create_user_driver(db, "user-1", driver.id, 3, 3).await?;

    let page = CatalogService::new(db)
        .list_owned::<entity::car_part::Entity>("user-1", &CatalogQuery::default())
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].ownership, Ownership::Unowned);

    Ok(())
}
