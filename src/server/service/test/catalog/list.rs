use super::*;

/// Tests the filter is applied before paging.
///
/// Expected: Ok with the second page of rarity 2 drivers and totals for all of them
#[tokio::test]
async fn filters_then_pages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["A", "B", "C"] {
        factory::driver::DriverFactory::new(db)
            .name(name)
            .rarity(2)
            .build()
            .await?;
    }
    factory::driver::DriverFactory::new(db)
        .name("D")
        .rarity(1)
        .build()
        .await?;

    let query = CatalogQuery {
        filter: CatalogFilter {
            rarity: Some(2),
            ..Default::default()
        },
        page: PageRequest::new(Some(2), Some(2)),
    };
    let page = CatalogService::new(db)
        .list::<entity::driver::Entity>(&query)
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "C");

    Ok(())
}

/// Expected: Err(AppError::DbErr) when the catalog table is missing
#[tokio::test]
async fn surfaces_storage_errors() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CatalogService::new(db)
        .list::<entity::boost::Entity>(&CatalogQuery::default())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
