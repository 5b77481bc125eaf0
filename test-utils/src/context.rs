use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// In-memory SQLite databases are private to one connection, so the pool is held at one.
const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Test context holding the in-memory airline database.
///
/// The database is opened on first access and lives as long as the context. Foreign keys
/// are enforced, so rows referencing missing airplanes, flights, staff or passengers fail
/// the same way they do against a migrated database.
pub struct TestContext {
    /// Connection to the in-memory database, `None` until `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or opens the in-memory database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to open the database or enable foreign keys
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut options = ConnectOptions::new(TEST_DATABASE_URL);
                options
                    .max_connections(1)
                    .min_connections(1)
                    .sqlx_logging(false);

                let db = Database::connect(options).await?;
                db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Creates the tables for a test, parents before children.
    ///
    /// Called by `TestBuilder::build()` with statements generated from the entities.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
