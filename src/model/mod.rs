//! Wire-level DTOs shared by every endpoint.

pub mod api;
pub mod catalog;
pub mod user;
