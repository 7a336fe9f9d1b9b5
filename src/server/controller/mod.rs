//! HTTP request handlers.
//!
//! Controllers resolve access, parse request input into domain parameters, call a
//! service and convert the result into a response envelope. They hold no business
//! logic of their own.

pub mod auth;
pub mod catalog;
pub mod custom_name;
pub mod user_item;
