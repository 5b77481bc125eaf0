use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::{contact::ContactDetails, passenger::Passenger};

pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a passenger and their contact row.
    ///
    /// Performs two inserts; callers run this inside a transaction.
    ///
    /// # Arguments
    /// - `username` - Username, used as the passenger ID
    /// - `first_name` - Passenger's first name
    /// - `surname` - Passenger's surname
    /// - `password_hash` - PHC string produced by the password hasher
    /// - `contact` - Home and work contact details
    ///
    /// # Returns
    /// - `Ok(Passenger)` - The inserted passenger
    /// - `Err(DbErr)` - Database error, including a unique violation on the username
    pub async fn create(
        &self,
        username: String,
        first_name: String,
        surname: String,
        password_hash: String,
        contact: ContactDetails,
    ) -> Result<Passenger, DbErr> {
        let passenger = entity::passenger::ActiveModel {
            id: ActiveValue::Set(username),
            first_name: ActiveValue::Set(first_name),
            surname: ActiveValue::Set(surname),
            password_hash: ActiveValue::Set(password_hash),
        }
        .insert(self.db)
        .await?;

        entity::passenger_contact::ActiveModel {
            passenger_id: ActiveValue::Set(passenger.id.clone()),
            home_address: ActiveValue::Set(contact.home_address),
            work_address: ActiveValue::Set(contact.work_address),
            home_phone: ActiveValue::Set(contact.home_phone),
            work_phone: ActiveValue::Set(contact.work_phone),
        }
        .insert(self.db)
        .await?;

        Ok(Passenger::from_entity(passenger))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Passenger>, DbErr> {
        let entity = entity::prelude::Passenger::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Passenger::from_entity))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Fetches a passenger together with their stored password hash.
    ///
    /// # Returns
    /// - `Ok(Some((Passenger, String)))` - Passenger found with its PHC hash string
    /// - `Ok(None)` - No passenger with that username
    /// - `Err(DbErr)` - Database error
    pub async fn find_with_password_hash(
        &self,
        id: &str,
    ) -> Result<Option<(Passenger, String)>, DbErr> {
        let entity = entity::prelude::Passenger::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let hash = entity.password_hash.clone();
            (Passenger::from_entity(entity), hash)
        }))
    }
}
