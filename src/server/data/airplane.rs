use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

use crate::server::model::airplane::{Airplane, CreateAirplaneParams};

pub struct AirplaneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new airplane.
    ///
    /// # Arguments
    /// - `params` - Serial number, manufacturer, model number and type rating
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The inserted airplane
    /// - `Err(DbErr)` - Database error, including a unique violation on the serial number
    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, DbErr> {
        let entity = entity::airplane::ActiveModel {
            serial_number: ActiveValue::Set(params.serial_number),
            manufacturer: ActiveValue::Set(params.manufacturer),
            model_number: ActiveValue::Set(params.model_number),
            type_rating: ActiveValue::Set(params.type_rating.into_inner()),
        }
        .insert(self.db)
        .await?;

        Ok(Airplane::from_entity(entity))
    }

    /// Finds an airplane by its serial number.
    ///
    /// # Returns
    /// - `Ok(Some(Airplane))` - Airplane found
    /// - `Ok(None)` - No airplane with that serial number
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_serial_number(&self, serial_number: i64) -> Result<Option<Airplane>, DbErr> {
        let entity = entity::prelude::Airplane::find_by_id(serial_number)
            .one(self.db)
            .await?;

        Ok(entity.map(Airplane::from_entity))
    }

    /// Checks whether an airplane with the serial number exists.
    pub async fn exists(&self, serial_number: i64) -> Result<bool, DbErr> {
        Ok(self.find_by_serial_number(serial_number).await?.is_some())
    }

    /// Counts all airplanes in the fleet.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Airplane::find().count(self.db).await
    }
}
