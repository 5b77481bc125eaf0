use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::assignment::Booking;

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Books a passenger onto a flight.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The inserted booking
    /// - `Err(DbErr)` - Database error, including a unique violation when the passenger
    ///   already holds a booking on the flight
    pub async fn create(&self, booking: &Booking) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            passenger_id: ActiveValue::Set(booking.passenger_id.clone()),
            flight_num: ActiveValue::Set(booking.flight_num),
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn exists(&self, passenger_id: &str, flight_num: i64) -> Result<bool, DbErr> {
        let entity = entity::prelude::Booking::find_by_id((passenger_id.to_string(), flight_num))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Removes every booking on a flight.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted bookings
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_flight(&self, flight_num: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::FlightNum.eq(flight_num))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
