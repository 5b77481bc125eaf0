//! Factories for the composite-key join tables.
//!
//! Crew assignments, flight path entries and bookings carry no data beyond their two
//! keys, so each gets a single convenience function instead of a builder.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a staff member to a flight's crew.
pub async fn create_crew_assignment(
    db: &DatabaseConnection,
    staff_id: impl Into<String>,
    flight_num: i64,
) -> Result<entity::flight_crew::Model, DbErr> {
    entity::flight_crew::ActiveModel {
        staff_id: ActiveValue::Set(staff_id.into()),
        flight_num: ActiveValue::Set(flight_num),
    }
    .insert(db)
    .await
}

/// Adds a city to a flight's path.
pub async fn create_flight_path(
    db: &DatabaseConnection,
    flight_num: i64,
    city_id: i32,
) -> Result<entity::flight_path::Model, DbErr> {
    entity::flight_path::ActiveModel {
        flight_num: ActiveValue::Set(flight_num),
        city_id: ActiveValue::Set(city_id),
    }
    .insert(db)
    .await
}

/// Books a passenger onto a flight.
pub async fn create_booking(
    db: &DatabaseConnection,
    passenger_id: impl Into<String>,
    flight_num: i64,
) -> Result<entity::booking::Model, DbErr> {
    entity::booking::ActiveModel {
        passenger_id: ActiveValue::Set(passenger_id.into()),
        flight_num: ActiveValue::Set(flight_num),
    }
    .insert(db)
    .await
}
