use super::super::auth::*;
use crate::server::{error::AppError, middleware::session::AuthSession, model::identity::Identity};
use serde_json::Map;
use test_utils::{builder::TestBuilder, factory};

fn identity(subject: &str) -> Identity {
    Identity {
        subject: subject.to_string(),
        email: Some(format!("{}@example.com", subject)),
        user_metadata: Map::new(),
        app_metadata: Map::new(),
    }
}

mod establish_session;
mod is_admin;
