use super::super::custom_name::*;
use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, factory};

mod get_for_user;
mod set;
