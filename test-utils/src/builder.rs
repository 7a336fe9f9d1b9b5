use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to get a context with every table created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_ownership_tables()
///     .with_table(entity::prelude::Profile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the season table and the three catalog tables.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Season)
            .with_table(Driver)
            .with_table(CarPart)
            .with_table(Boost)
    }

    /// Adds the catalog tables plus every per-user ownership table.
    pub fn with_ownership_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(UserDriver)
            .with_table(UserCarPart)
            .with_table(UserBoost)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_ownership_tables()
            .with_table(Profile)
            .with_table(BoostCustomName)
    }

    /// Builds the context and creates every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
