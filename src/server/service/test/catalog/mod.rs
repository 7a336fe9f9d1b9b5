use super::super::catalog::*;
use crate::server::{
    error::AppError,
    model::{
        catalog::{CatalogFilter, CatalogQuery},
        ownership::{Ownership, UpsertOwnershipParams},
        page::PageRequest,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod list_owned;
mod upsert_ownership;
