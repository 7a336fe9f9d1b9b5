use crate::server::data::custom_name::BoostCustomNameRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_user;
mod upsert;
