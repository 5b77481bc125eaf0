use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::assignment::FlightPathStop;

pub struct FlightPathRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightPathRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a city to a flight's route.
    pub async fn create(&self, stop: &FlightPathStop) -> Result<FlightPathStop, DbErr> {
        let entity = entity::flight_path::ActiveModel {
            flight_num: ActiveValue::Set(stop.flight_num),
            city_id: ActiveValue::Set(stop.city_id),
        }
        .insert(self.db)
        .await?;

        Ok(FlightPathStop::from_entity(entity))
    }

    pub async fn exists(&self, flight_num: i64, city_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::FlightPath::find_by_id((flight_num, city_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Removes a flight's whole route.
    pub async fn delete_by_flight(&self, flight_num: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::FlightPath::delete_many()
            .filter(entity::flight_path::Column::FlightNum.eq(flight_num))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
