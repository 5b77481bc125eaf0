use sea_orm::DatabaseConnection;

use crate::server::{
    data::passenger::PassengerRepository,
    error::{auth::AuthError, AppError},
    model::passenger::{LoginParams, Passenger},
    util::password::verify_password,
};

/// Service for checking passenger credentials.
///
/// Login is a yes/no answer: no session or token is issued on success.
pub struct AuthService<'a> {
    /// Database connection for passenger lookups.
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a passenger's username and password.
    ///
    /// Unknown usernames and wrong passwords fail with the same error.
    ///
    /// # Arguments
    /// - `params` - Submitted username and password
    ///
    /// # Returns
    /// - `Ok(Passenger)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, params: LoginParams) -> Result<Passenger, AppError> {
        let Some((passenger, hash)) = PassengerRepository::new(self.db)
            .find_with_password_hash(&params.username)
            .await?
        else {
            tracing::debug!("Login attempt for unknown passenger {}", params.username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &hash) {
            tracing::debug!("Login attempt with wrong password for {}", passenger.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("Passenger {} logged in", passenger.id);

        Ok(passenger)
    }
}
