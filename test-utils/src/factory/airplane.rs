//! Airplane factory for creating test airplane entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airplanes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let airplane = AirplaneFactory::new(&db)
///     .serial_number(42)
///     .type_rating("D")
///     .build()
///     .await?;
/// ```
pub struct AirplaneFactory<'a> {
    db: &'a DatabaseConnection,
    serial_number: i64,
    manufacturer: String,
    model_number: String,
    type_rating: String,
}

impl<'a> AirplaneFactory<'a> {
    /// Creates a new AirplaneFactory with default values.
    ///
    /// Defaults:
    /// - serial_number: auto-incremented
    /// - manufacturer: `"Boeing"`
    /// - model_number: `"737"`
    /// - type_rating: `"B"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            serial_number: next_id() as i64,
            manufacturer: "Boeing".to_string(),
            model_number: "737".to_string(),
            type_rating: "B".to_string(),
        }
    }

    pub fn serial_number(mut self, serial_number: i64) -> Self {
        self.serial_number = serial_number;
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn model_number(mut self, model_number: impl Into<String>) -> Self {
        self.model_number = model_number.into();
        self
    }

    pub fn type_rating(mut self, type_rating: impl Into<String>) -> Self {
        self.type_rating = type_rating.into();
        self
    }

    /// Builds and inserts the airplane entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airplane::Model)` - Created airplane entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airplane::Model, DbErr> {
        entity::airplane::ActiveModel {
            serial_number: ActiveValue::Set(self.serial_number),
            manufacturer: ActiveValue::Set(self.manufacturer),
            model_number: ActiveValue::Set(self.model_number),
            type_rating: ActiveValue::Set(self.type_rating),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airplane with default values.
///
/// Shorthand for `AirplaneFactory::new(db).build().await`.
pub async fn create_airplane(db: &DatabaseConnection) -> Result<entity::airplane::Model, DbErr> {
    AirplaneFactory::new(db).build().await
}
