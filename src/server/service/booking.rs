use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, flight::FlightRepository},
    error::AppError,
    guard::{Reference, ReferenceGuard},
    model::{assignment::Booking, flight::Flight},
    service::flight::non_empty,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a passenger onto a flight.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The new booking
    /// - `Err(AppError::BadRequest)` - Unknown passenger, unknown flight, or the passenger
    ///   already holds a booking on the flight
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, booking: Booking) -> Result<Booking, AppError> {
        ReferenceGuard::new(self.db)
            .require(&[
                Reference::Passenger(&booking.passenger_id),
                Reference::Flight(booking.flight_num),
            ])
            .await?;

        let repo = BookingRepository::new(self.db);
        if repo
            .exists(&booking.passenger_id, booking.flight_num)
            .await?
        {
            return Err(duplicate_booking(&booking));
        }

        let created = repo
            .create(&booking)
            .await
            .map_err(|e| AppError::from_insert(e, || duplicate_booking(&booking)))?;

        tracing::info!(
            "Booked passenger {} on flight {}",
            created.passenger_id,
            created.flight_num
        );

        Ok(created)
    }

    /// Lists the flights a passenger has booked.
    ///
    /// # Returns
    /// - `Ok(Vec<Flight>)` - Booked flights ordered by flight number
    /// - `Err(AppError::NotFound)` - Passenger has no bookings
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_for_passenger(&self, passenger_id: &str) -> Result<Vec<Flight>, AppError> {
        let flights = FlightRepository::new(self.db)
            .get_booked_by_passenger(passenger_id)
            .await?;

        non_empty(flights, || {
            format!("No bookings found for passenger ID {}", passenger_id)
        })
    }
}

fn duplicate_booking(booking: &Booking) -> AppError {
    AppError::BadRequest(format!(
        "Booking for passenger ID {} on flight {} already exists",
        booking.passenger_id, booking.flight_num
    ))
}
