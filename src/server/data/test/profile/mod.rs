use crate::server::{data::profile::ProfileRepository, model::identity::Identity};
use sea_orm::DbErr;
use serde_json::{json, Map};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod upsert_from_identity;

fn identity(subject: &str, email: Option<&str>) -> Identity {
    Identity {
        subject: subject.to_string(),
        email: email.map(str::to_string),
        user_metadata: Map::new(),
        app_metadata: Map::new(),
    }
}
