//! Flight factory for creating test flight entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// Only inserts the flight row. Use `helpers::create_flight_with_dependencies` when a
/// crew assignment is needed as well.
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_num: i64,
    serial_number: i64,
    origin: String,
    destination: String,
    arrival_time: String,
    departure_time: String,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_num: auto-incremented
    /// - origin: `"London"`
    /// - destination: `"Manchester"`
    /// - departure_time / arrival_time: fixed timestamps one hour apart
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `serial_number` - Serial number of the airplane flying the route
    pub fn new(db: &'a DatabaseConnection, serial_number: i64) -> Self {
        Self {
            db,
            flight_num: next_id() as i64,
            serial_number,
            origin: "London".to_string(),
            destination: "Manchester".to_string(),
            arrival_time: "2024-05-01T11:00".to_string(),
            departure_time: "2024-05-01T10:00".to_string(),
        }
    }

    pub fn flight_num(mut self, flight_num: i64) -> Self {
        self.flight_num = flight_num;
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Builds and inserts the flight entity into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            flight_num: ActiveValue::Set(self.flight_num),
            serial_number: ActiveValue::Set(self.serial_number),
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            arrival_time: ActiveValue::Set(self.arrival_time),
            departure_time: ActiveValue::Set(self.departure_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values for the given airplane.
pub async fn create_flight(
    db: &DatabaseConnection,
    serial_number: i64,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, serial_number).build().await
}
