//! Request processing: identity resolution, bearer tokens, sessions and access guards.

pub mod auth;
pub mod identity;
pub mod session;
pub mod token;
