use entity::prelude::*;
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
/// use entity::prelude::{Airplane, Flight};
///
/// let test = TestBuilder::new()
///     .with_table(Airplane)
///     .with_table(Flight)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for flight operations.
    ///
    /// Adds, in dependency order:
    /// - Airplane
    /// - InterCity
    /// - Staff
    /// - Contact
    /// - Pilot
    /// - Flight
    /// - FlightCrew
    /// - FlightPath
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_flight_tables(self) -> Self {
        self.with_table(Airplane)
            .with_table(InterCity)
            .with_table(Staff)
            .with_table(Contact)
            .with_table(Pilot)
            .with_table(Flight)
            .with_table(FlightCrew)
            .with_table(FlightPath)
    }

    /// Adds every table of the schema.
    ///
    /// Equivalent to `with_flight_tables()` followed by the passenger and booking tables.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_flight_tables()
            .with_table(Passenger)
            .with_table(PassengerContact)
            .with_table(Booking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
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
