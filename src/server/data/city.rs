use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::city::{City, CreateCityParams};

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a city, letting the database assign the ID when none is given.
    ///
    /// # Arguments
    /// - `params` - Optional explicit ID, name and country
    ///
    /// # Returns
    /// - `Ok(City)` - The inserted city with its final ID
    /// - `Err(DbErr)` - Database error, including a unique violation on an explicit ID
    pub async fn create(&self, params: CreateCityParams) -> Result<City, DbErr> {
        let id = match params.id {
            Some(id) => ActiveValue::Set(id),
            None => ActiveValue::NotSet,
        };

        let entity = entity::inter_city::ActiveModel {
            id,
            name: ActiveValue::Set(params.name),
            country: ActiveValue::Set(params.country),
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::InterCity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(City::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
