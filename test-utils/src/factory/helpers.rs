//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight with its airplane and an assigned pilot.
///
/// This is a convenience method that creates:
/// 1. Airplane (rating "B")
/// 2. Staff member
/// 3. Pilot row for that staff member (rating "A")
/// 4. Flight flown by the airplane
/// 5. FlightCrew row assigning the pilot to the flight
///
/// # Returns
/// - `Ok((airplane, staff, pilot, flight))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::airplane::Model,
        entity::staff::Model,
        entity::pilot::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let airplane = crate::factory::airplane::create_airplane(db).await?;
    let staff = crate::factory::staff::create_staff(db).await?;
    let pilot = crate::factory::pilot::create_pilot(db, &staff.id).await?;
    let flight = crate::factory::flight::create_flight(db, airplane.serial_number).await?;
    crate::factory::assignment::create_crew_assignment(db, &staff.id, flight.flight_num).await?;

    Ok((airplane, staff, pilot, flight))
}
