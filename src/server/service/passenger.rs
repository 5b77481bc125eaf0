use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::passenger::PassengerRepository,
    error::AppError,
    model::passenger::{CreatePassengerParams, Passenger},
    util::password::hash_password,
};

pub struct PassengerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a passenger and their contact details.
    ///
    /// The password is hashed before anything is written. Both rows are inserted in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Passenger)` - The registered passenger
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::AuthErr)` - Password could not be hashed
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn register(&self, params: CreatePassengerParams) -> Result<Passenger, AppError> {
        if PassengerRepository::new(self.db)
            .exists(&params.username)
            .await?
        {
            return Err(username_taken(&params.username));
        }

        let password_hash = hash_password(&params.password)?;
        let username = params.username.clone();

        let txn = self.db.begin().await?;
        let passenger = PassengerRepository::new(&txn)
            .create(
                params.username,
                params.first_name,
                params.surname,
                password_hash,
                params.contact,
            )
            .await
            .map_err(|e| AppError::from_insert(e, || username_taken(&username)))?;
        txn.commit().await?;

        tracing::info!("Registered passenger {}", passenger.id);

        Ok(passenger)
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::Conflict(format!("Username {} is already taken", username))
}
