//! SeaORM entity models for the catalog and collection tables.
//!
//! Catalog tables (`season`, `driver`, `car_part`, `boost`) hold the game's static
//! reference content and are only written by administrative imports. Ownership tables
//! (`user_driver`, `user_car_part`, `user_boost`) hold one row per (user, item) pair,
//! keyed by a composite primary key so upserts have an explicit conflict target.

pub mod boost;
pub mod boost_custom_name;
pub mod car_part;
pub mod driver;
pub mod prelude;
pub mod profile;
pub mod season;
pub mod user_boost;
pub mod user_car_part;
pub mod user_driver;
