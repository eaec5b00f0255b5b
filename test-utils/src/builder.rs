use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{League, LeagueLeaderboard};
///
/// let test = TestBuilder::new()
///     .with_table(League)
///     .with_table(LeagueLeaderboard)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether the league migrations run before the entity tables are created.
    migrate: bool,
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            migrate: false,
            tables: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Creates the full league schema by running every migration.
    ///
    /// Unlike `with_table`, the resulting tables carry the unique indexes the
    /// migrations define, e.g. one league name per guild and one member record per
    /// (guild, user), so constraint violations surface in tests as they do in
    /// production.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds the test context, creating an in-memory SQLite database, running the
    /// migrations if requested, then creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect, migrate or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
