pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_season_table;
mod m20260301_000002_create_driver_table;
mod m20260301_000003_create_car_part_table;
mod m20260301_000004_create_boost_table;
mod m20260301_000005_create_profile_table;
mod m20260302_000006_create_user_driver_table;
mod m20260302_000007_create_user_car_part_table;
mod m20260302_000008_create_user_boost_table;
mod m20260310_000009_create_boost_custom_name_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_season_table::Migration),
            Box::new(m20260301_000002_create_driver_table::Migration),
            Box::new(m20260301_000003_create_car_part_table::Migration),
            Box::new(m20260301_000004_create_boost_table::Migration),
            Box::new(m20260301_000005_create_profile_table::Migration),
            Box::new(m20260302_000006_create_user_driver_table::Migration),
            Box::new(m20260302_000007_create_user_car_part_table::Migration),
            Box::new(m20260302_000008_create_user_boost_table::Migration),
            Box::new(m20260310_000009_create_boost_custom_name_table::Migration),
        ]
    }
}
