use super::*;

/// Tests filtering drivers by rarity.
///
/// Verifies that only drivers with exactly the requested rarity are returned and that
/// they come back ordered by name.
///
/// Expected: Ok with the two rarity 3 drivers in name order
#[tokio::test]
async fn filters_by_rarity_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DriverFactory::new(db).name("Zed").rarity(3).build().await?;
    DriverFactory::new(db).name("Amy").rarity(3).build().await?;
    DriverFactory::new(db).name("Bob").rarity(2).build().await?;

    let repo = CatalogRepository::new(db);
    let drivers = repo
        .find::<entity::driver::Entity>(&CatalogFilter {
            rarity: Some(3),
            ..Default::default()
        })
        .await?;

    let names: Vec<_> = drivers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed"]);
    assert!(drivers.iter().all(|d| d.rarity == 3));

    Ok(())
}

/// Tests an empty filter returns the whole catalog.
///
/// Expected: Ok with every boost
#[tokio::test]
async fn empty_filter_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_boosts(db, 5).await?;

    let repo = CatalogRepository::new(db);
    let boosts = repo
        .find::<entity::boost::Entity>(&CatalogFilter::default())
        .await?;

    assert_eq!(boosts.len(), 5);

    Ok(())
}

/// Tests name ties are broken by id.
///
/// Expected: Ok with equal names in insertion (id) order
#[tokio::test]
async fn breaks_name_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = BoostFactory::new(db).name("Nitro").build().await?;
    let second = BoostFactory::new(db).name("Nitro").build().await?;

    let repo = CatalogRepository::new(db);
    let boosts = repo
        .find::<entity::boost::Entity>(&CatalogFilter::default())
        .await?;

    let ids: Vec<_> = boosts.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests search matches a case-insensitive substring of the name.
///
/// Expected: Ok with only the car parts containing "turbo" in any case
#[tokio::test]
async fn search_is_case_insensitive_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CarPartFactory::new(db).name("Turbo Charger").build().await?;
    CarPartFactory::new(db).name("Twin turbo").build().await?;
    CarPartFactory::new(db).name("Brake Pads").build().await?;

    let repo = CatalogRepository::new(db);
    let parts = repo
        .find::<entity::car_part::Entity>(&CatalogFilter {
            search: Some("TURBO".to_string()),
            ..Default::default()
        })
        .await?;

    let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Turbo Charger", "Twin turbo"]);

    Ok(())
}

/// Tests `%`, `_` and `\` in a search term match only themselves.
///
/// Expected: Ok with no matches for wildcard terms, and a literal match for "50%"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BoostFactory::new(db).name("Turbo").build().await?;
    BoostFactory::new(db).name("Nitro").build().await?;
    BoostFactory::new(db).name("Nitro 50%").build().await?;

    let repo = CatalogRepository::new(db);
    for term in ["_", "T_rbo", "%o", "\\"] {
        let boosts = repo
            .find::<entity::boost::Entity>(&CatalogFilter {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .await?;
        assert!(boosts.is_empty(), "term {:?} matched {:?}", term, boosts);
    }

    let boosts = repo
        .find::<entity::boost::Entity>(&CatalogFilter {
            search: Some("50%".to_string()),
            ..Default::default()
        })
        .await?;
    let names: Vec<_> = boosts.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Nitro 50%"]);

    Ok(())
}

/// Tests filtering by season.
///
/// Expected: Ok with only items from the requested season
#[tokio::test]
async fn filters_by_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season_one = factory::create_season(db).await?;
    let season_two = factory::create_season(db).await?;
    let in_season = DriverFactory::new(db)
        .season_id(season_one.id)
        .build()
        .await?;
    DriverFactory::new(db).season_id(season_two.id).build().await?;
    DriverFactory::new(db).build().await?;

    let repo = CatalogRepository::new(db);
    let drivers = repo
        .find::<entity::driver::Entity>(&CatalogFilter {
            season_id: Some(season_one.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, in_season.id);

    Ok(())
}

/// Tests the catalog-specific subtype filter for each catalog.
///
/// Expected: Ok with only items matching the subtype
#[tokio::test]
async fn filters_by_subtype() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DriverFactory::new(db).min_tier(2).build().await?;
    DriverFactory::new(db).min_tier(4).build().await?;
    CarPartFactory::new(db).part_type("engine").build().await?;
    CarPartFactory::new(db).part_type("brakes").build().await?;
    BoostFactory::new(db).boost_type("shield").build().await?;
    BoostFactory::new(db).boost_type("overtake").build().await?;

    let repo = CatalogRepository::new(db);

    let drivers = repo
        .find::<entity::driver::Entity>(&CatalogFilter {
            subtype: Some(SubtypeFilter::Number(4)),
            ..Default::default()
        })
        .await?;
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].min_tier, 4);

    let parts = repo
        .find::<entity::car_part::Entity>(&CatalogFilter {
            subtype: Some(SubtypeFilter::Text("engine".to_string())),
            ..Default::default()
        })
        .await?;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].part_type, "engine");

    let boosts = repo
        .find::<entity::boost::Entity>(&CatalogFilter {
            subtype: Some(SubtypeFilter::Text("shield".to_string())),
            ..Default::default()
        })
        .await?;
    assert_eq!(boosts.len(), 1);
    assert_eq!(boosts[0].boost_type, "shield");

    Ok(())
}

/// Tests constraints combine with AND.
///
/// Expected: Ok with only the item matching rarity and series
#[tokio::test]
async fn combines_constraints() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = BoostFactory::new(db).rarity(2).series(5).build().await?;
    BoostFactory::new(db).rarity(2).series(6).build().await?;
    BoostFactory::new(db).rarity(3).series(5).build().await?;

    let repo = CatalogRepository::new(db);
    let boosts = repo
        .find::<entity::boost::Entity>(&CatalogFilter {
            rarity: Some(2),
            series: Some(5),
            ..Default::default()
        })
        .await?;

    assert_eq!(boosts.len(), 1);
    assert_eq!(boosts[0].id, target.id);

    Ok(())
}
