//! Business logic between controllers and repositories.
//!
//! Services take parsed domain parameters, coordinate one or more repositories and
//! return domain models. They never see DTOs or HTTP types.

pub mod auth;
pub mod catalog;
pub mod custom_name;
pub mod merge;
pub mod pagination;

#[cfg(test)]
mod test;
