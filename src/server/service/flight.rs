use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, flight::FlightRepository, flight_crew::FlightCrewRepository,
        flight_path::FlightPathRepository,
    },
    error::AppError,
    guard::{require_rating, ReferenceGuard},
    model::flight::{CreateFlightParams, Flight, FlightFilter, ScheduledFlight},
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a flight and assigns its pilot to the crew.
    ///
    /// Checks, in order, that the pilot exists, that the airplane exists and that the
    /// pilot's rating permits the airplane. The flight row and the pilot's crew row are
    /// written in one transaction.
    ///
    /// # Arguments
    /// - `params` - Flight details and the pilot's staff ID
    ///
    /// # Returns
    /// - `Ok(ScheduledFlight)` - The created flight and its pilot
    /// - `Err(AppError::BadRequest)` - Unknown pilot, unknown airplane or insufficient rating;
    ///   no flight or crew row is written
    /// - `Err(AppError::Conflict)` - Flight number already in use
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateFlightParams) -> Result<ScheduledFlight, AppError> {
        let txn = self.db.begin().await?;
        let guard = ReferenceGuard::new(&txn);

        let pilot = guard.require_pilot(&params.pilot_id).await?;
        let airplane = guard.require_airplane(params.serial_number).await?;
        require_rating(&pilot, &airplane)?;

        let flight_repo = FlightRepository::new(&txn);
        if flight_repo.exists(params.flight_num).await? {
            return Err(duplicate_flight(params.flight_num));
        }

        let flight = flight_repo
            .create(&params)
            .await
            .map_err(|e| AppError::from_insert(e, || duplicate_flight(params.flight_num)))?;

        FlightCrewRepository::new(&txn)
            .create(&pilot.staff_id, flight.flight_num)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Scheduled flight {} from {} to {} with pilot {}",
            flight.flight_num,
            flight.origin,
            flight.destination,
            pilot.staff_id
        );

        Ok(ScheduledFlight {
            flight,
            pilot_id: pilot.staff_id,
        })
    }

    /// Lists flights matching optional exact origin and destination filters.
    ///
    /// # Returns
    /// - `Ok(Vec<Flight>)` - Matching flights ordered by flight number
    /// - `Err(AppError::NotFound)` - No flight matches
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_filtered(&self, filter: FlightFilter) -> Result<Vec<Flight>, AppError> {
        let flights = FlightRepository::new(self.db).get_filtered(&filter).await?;

        non_empty(flights, || "No flights found matching the criteria".to_string())
    }

    /// Lists flights whose number contains `pattern`; an empty pattern lists every flight.
    pub async fn search(&self, pattern: &str) -> Result<Vec<Flight>, AppError> {
        let flights = FlightRepository::new(self.db).search_by_number(pattern).await?;

        non_empty(flights, || {
            format!("No flights found matching flight number pattern {}", pattern)
        })
    }

    /// Lists the flights a staff member is assigned to.
    pub async fn get_for_staff(&self, staff_id: &str) -> Result<Vec<Flight>, AppError> {
        let flights = FlightRepository::new(self.db)
            .get_crewed_by_staff(staff_id)
            .await?;

        non_empty(flights, || {
            format!("No flights found for employee number {}", staff_id)
        })
    }

    /// Deletes a flight with its crew assignments, route and bookings.
    ///
    /// Dependents are removed first, then the flight row, all in one transaction. Deleting
    /// a flight number that does not exist succeeds without changing anything.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether a flight row was removed
    /// - `Err(AppError::DbErr)` - Database error; every step is rolled back
    pub async fn delete(&self, flight_num: i64) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let crew = FlightCrewRepository::new(&txn)
            .delete_by_flight(flight_num)
            .await?;
        let path = FlightPathRepository::new(&txn)
            .delete_by_flight(flight_num)
            .await?;
        let bookings = BookingRepository::new(&txn)
            .delete_by_flight(flight_num)
            .await?;
        let deleted = FlightRepository::new(&txn).delete(flight_num).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted flight {} ({} flight rows, {} crew, {} path, {} bookings)",
            flight_num,
            deleted,
            crew,
            path,
            bookings
        );

        Ok(deleted > 0)
    }
}

fn duplicate_flight(flight_num: i64) -> AppError {
    AppError::Conflict(format!("Flight number {} already exists", flight_num))
}

/// Turns an empty listing into a 404 carrying `message`.
pub(super) fn non_empty(
    flights: Vec<Flight>,
    message: impl FnOnce() -> String,
) -> Result<Vec<Flight>, AppError> {
    if flights.is_empty() {
        return Err(AppError::NotFound(message()));
    }

    Ok(flights)
}
