use sea_orm::DatabaseConnection;

use crate::server::{
    data::airplane::AirplaneRepository,
    error::AppError,
    model::airplane::{Airplane, CreateAirplaneParams},
};

const DUPLICATE_SERIAL: &str = "Airplane with this serial number already exists";

pub struct AirplaneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new airplane.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The registered airplane
    /// - `Err(AppError::Conflict)` - Serial number already registered; the existing row is
    ///   left untouched
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, AppError> {
        let repo = AirplaneRepository::new(self.db);

        if repo.exists(params.serial_number).await? {
            return Err(AppError::Conflict(DUPLICATE_SERIAL.to_string()));
        }

        let airplane = repo.create(params).await.map_err(|e| {
            AppError::from_insert(e, || AppError::Conflict(DUPLICATE_SERIAL.to_string()))
        })?;

        tracing::info!(
            "Registered airplane {} ({} {})",
            airplane.serial_number,
            airplane.manufacturer,
            airplane.model_number
        );

        Ok(airplane)
    }
}
