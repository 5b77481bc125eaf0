//! Passenger factory for creating test passenger entities.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test passengers with customizable fields.
///
/// The plaintext password is hashed with Argon2 before insert so login tests can verify
/// against the stored hash.
pub struct PassengerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    first_name: String,
    surname: String,
    password: String,
}

impl<'a> PassengerFactory<'a> {
    /// Creates a new PassengerFactory with default values.
    ///
    /// Defaults:
    /// - id: `"passenger{id}"` where id is auto-incremented
    /// - first_name: `"Test"`
    /// - surname: `"Passenger"`
    /// - password: `"password"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: format!("passenger{}", next_id()),
            first_name: "Test".to_string(),
            surname: "Passenger".to_string(),
            password: "password".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the passenger entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::passenger::Model)` - Created passenger entity
    /// - `Err(DbErr)` - Hashing failed or database error during insert
    pub async fn build(self) -> Result<entity::passenger::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?
            .to_string();

        entity::passenger::ActiveModel {
            id: ActiveValue::Set(self.id),
            first_name: ActiveValue::Set(self.first_name),
            surname: ActiveValue::Set(self.surname),
            password_hash: ActiveValue::Set(password_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passenger with default values and password `"password"`.
pub async fn create_passenger(db: &DatabaseConnection) -> Result<entity::passenger::Model, DbErr> {
    PassengerFactory::new(db).build().await
}
