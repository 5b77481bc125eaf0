use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::assignment::CrewAssignment;

pub struct FlightCrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightCrewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a staff member to a flight.
    ///
    /// # Returns
    /// - `Ok(CrewAssignment)` - The inserted assignment
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair is
    ///   already assigned
    pub async fn create(&self, staff_id: &str, flight_num: i64) -> Result<CrewAssignment, DbErr> {
        let entity = entity::flight_crew::ActiveModel {
            staff_id: ActiveValue::Set(staff_id.to_string()),
            flight_num: ActiveValue::Set(flight_num),
        }
        .insert(self.db)
        .await?;

        Ok(CrewAssignment::from_entity(entity))
    }

    pub async fn exists(&self, staff_id: &str, flight_num: i64) -> Result<bool, DbErr> {
        let entity = entity::prelude::FlightCrew::find_by_id((staff_id.to_string(), flight_num))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Removes every crew assignment of a flight.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted assignments
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_flight(&self, flight_num: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::FlightCrew::delete_many()
            .filter(entity::flight_crew::Column::FlightNum.eq(flight_num))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
