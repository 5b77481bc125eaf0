//! Existence checks run before inserting rows that reference other rows.
//!
//! Every check runs on the connection the caller passes in, so a service inside a transaction
//! checks and writes on the same transaction.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        airplane::AirplaneRepository, city::CityRepository, flight::FlightRepository,
        passenger::PassengerRepository, pilot::PilotRepository, staff::StaffRepository,
    },
    error::AppError,
    model::{airplane::Airplane, staff::Pilot},
};

/// A row that must exist before a dependent row is inserted.
pub enum Reference<'r> {
    Staff(&'r str),
    Flight(i64),
    City(i32),
    Passenger(&'r str),
}

pub struct ReferenceGuard<'a, C: ConnectionTrait> {
    db: &'a C,
    reject: fn(String) -> AppError,
}

impl<'a, C: ConnectionTrait> ReferenceGuard<'a, C> {
    /// Creates a guard that rejects missing references with 400 Bad Request.
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            reject: AppError::BadRequest,
        }
    }

    /// Rejects missing references with 404 Not Found instead.
    pub fn not_found(mut self) -> Self {
        self.reject = AppError::NotFound;
        self
    }

    /// Checks that every reference exists, in the order given.
    ///
    /// # Arguments
    /// - `references` - Rows the pending insert points at
    ///
    /// # Returns
    /// - `Ok(())` - Every referenced row exists
    /// - `Err(AppError::BadRequest)` - First missing reference, named in the message
    ///   (`NotFound` when built with `not_found()`)
    /// - `Err(AppError::DbErr)` - Database error during a lookup
    pub async fn require(&self, references: &[Reference<'_>]) -> Result<(), AppError> {
        for reference in references {
            let (exists, message) = match reference {
                Reference::Staff(id) => (
                    StaffRepository::new(self.db).exists(id).await?,
                    format!("Staff ID {} does not exist", id),
                ),
                Reference::Flight(flight_num) => (
                    FlightRepository::new(self.db).exists(*flight_num).await?,
                    format!("Flight number {} does not exist", flight_num),
                ),
                Reference::City(id) => (
                    CityRepository::new(self.db).exists(*id).await?,
                    format!("City ID {} does not exist", id),
                ),
                Reference::Passenger(id) => (
                    PassengerRepository::new(self.db).exists(id).await?,
                    format!("Passenger ID {} does not exist", id),
                ),
            };

            if !exists {
                return Err(self.rejection(message));
            }
        }

        Ok(())
    }

    /// Fetches the pilot row of a staff member or rejects the request.
    pub async fn require_pilot(&self, staff_id: &str) -> Result<Pilot, AppError> {
        PilotRepository::new(self.db)
            .find_by_staff_id(staff_id)
            .await?
            .ok_or_else(|| self.rejection(format!("Pilot ID {} does not exist", staff_id)))
    }

    /// Fetches an airplane or rejects the request.
    pub async fn require_airplane(&self, serial_number: i64) -> Result<Airplane, AppError> {
        AirplaneRepository::new(self.db)
            .find_by_serial_number(serial_number)
            .await?
            .ok_or_else(|| {
                self.rejection(format!(
                    "Airplane serial number {} does not exist",
                    serial_number
                ))
            })
    }

    fn rejection(&self, message: String) -> AppError {
        tracing::debug!("Reference check failed: {}", message);
        (self.reject)(message)
    }
}

/// Rejects a pilot whose type rating orders after the airplane's rating.
///
/// # Returns
/// - `Ok(())` - Pilot may fly the airplane
/// - `Err(AppError::BadRequest)` - Pilot rating is insufficient
pub fn require_rating(pilot: &Pilot, airplane: &Airplane) -> Result<(), AppError> {
    if airplane.type_rating.permits(&pilot.type_rating) {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "Pilot rating {} is not sufficient for Airplane rating {}",
        pilot.type_rating, airplane.type_rating
    )))
}
