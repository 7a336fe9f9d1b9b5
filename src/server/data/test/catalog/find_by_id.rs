use super::*;

/// Expected: Ok(Some) with the stored item
#[tokio::test]
async fn finds_existing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boost = BoostFactory::new(db).name("Shield").build().await?;

    let repo = CatalogRepository::new(db);
    let found = repo.find_by_id::<entity::boost::Entity>(boost.id).await?;

    assert_eq!(found.map(|b| b.name), Some("Shield".to_string()));

    Ok(())
}

/// Tests ids are scoped to their own catalog.
///
/// Expected: Ok(None) for an unknown id and for an id from another catalog
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_driver(db).await?;

    let repo = CatalogRepository::new(db);
    assert!(repo
        .find_by_id::<entity::driver::Entity>(driver.id + 100)
        .await?
        .is_none());
    assert!(repo
        .find_by_id::<entity::boost::Entity>(driver.id)
        .await?
        .is_none());

    Ok(())
}
