use crate::server::{
    data::catalog::CatalogRepository,
    model::catalog::{CatalogFilter, SubtypeFilter},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, boost::BoostFactory, car_part::CarPartFactory, driver::DriverFactory},
};

mod find;
mod find_by_id;
