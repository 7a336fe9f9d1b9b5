//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table or family of tables and return
//! domain models, keeping entity types out of the service layer.

pub mod catalog;
pub mod custom_name;
pub mod ownership;
pub mod profile;

#[cfg(test)]
mod test;
