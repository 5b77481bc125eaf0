use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::flight::{CreateFlightParams, Flight, FlightFilter};

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a flight row.
    ///
    /// The pilot ID in `params` is not stored here; the service records the pilot through
    /// `FlightCrewRepository` in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The inserted flight
    /// - `Err(DbErr)` - Database error, including a unique violation on the flight number
    ///   and a foreign key violation on an unknown airplane
    pub async fn create(&self, params: &CreateFlightParams) -> Result<Flight, DbErr> {
        let entity = entity::flight::ActiveModel {
            flight_num: ActiveValue::Set(params.flight_num),
            serial_number: ActiveValue::Set(params.serial_number),
            origin: ActiveValue::Set(params.origin.clone()),
            destination: ActiveValue::Set(params.destination.clone()),
            arrival_time: ActiveValue::Set(params.arrival_time.clone()),
            departure_time: ActiveValue::Set(params.departure_time.clone()),
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    pub async fn find_by_num(&self, flight_num: i64) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(flight_num)
            .one(self.db)
            .await?;

        Ok(entity.map(Flight::from_entity))
    }

    pub async fn exists(&self, flight_num: i64) -> Result<bool, DbErr> {
        Ok(self.find_by_num(flight_num).await?.is_some())
    }

    /// Lists flights matching the filter, ordered by flight number.
    ///
    /// Each filter field that is set must match exactly; an empty filter lists every flight.
    ///
    /// # Arguments
    /// - `filter` - Optional origin and destination
    ///
    /// # Returns
    /// - `Ok(Vec<Flight>)` - Matching flights, possibly empty
    /// - `Err(DbErr)` - Database error
    pub async fn get_filtered(&self, filter: &FlightFilter) -> Result<Vec<Flight>, DbErr> {
        let mut query = entity::prelude::Flight::find();

        if let Some(origin) = &filter.origin {
            query = query.filter(entity::flight::Column::Origin.eq(origin.as_str()));
        }
        if let Some(destination) = &filter.destination {
            query = query.filter(entity::flight::Column::Destination.eq(destination.as_str()));
        }

        let entities = query
            .order_by_asc(entity::flight::Column::FlightNum)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Lists flights whose number contains `pattern` as a substring.
    ///
    /// An empty pattern lists every flight. The pattern is matched against the decimal
    /// rendering of the flight number with SQL `LIKE`.
    pub async fn search_by_number(&self, pattern: &str) -> Result<Vec<Flight>, DbErr> {
        let mut query = entity::prelude::Flight::find();

        if !pattern.is_empty() {
            query = query.filter(entity::flight::Column::FlightNum.like(format!("%{}%", pattern)));
        }

        let entities = query
            .order_by_asc(entity::flight::Column::FlightNum)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Lists the flights a passenger has booked, ordered by flight number.
    pub async fn get_booked_by_passenger(&self, passenger_id: &str) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .inner_join(entity::prelude::Booking)
            .filter(entity::booking::Column::PassengerId.eq(passenger_id))
            .order_by_asc(entity::flight::Column::FlightNum)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Lists the flights a staff member is assigned to, ordered by flight number.
    pub async fn get_crewed_by_staff(&self, staff_id: &str) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .inner_join(entity::prelude::FlightCrew)
            .filter(entity::flight_crew::Column::StaffId.eq(staff_id))
            .order_by_asc(entity::flight::Column::FlightNum)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Deletes the flight row only.
    ///
    /// Crew, path and booking rows must be removed first; their foreign keys restrict
    /// deleting a referenced flight.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 when the flight did not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, flight_num: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(flight_num)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
