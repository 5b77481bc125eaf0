use sea_orm::DatabaseConnection;

use crate::server::{
    data::flight_path::FlightPathRepository,
    error::AppError,
    guard::{Reference, ReferenceGuard},
    model::assignment::FlightPathStop,
};

pub struct FlightPathService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightPathService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a city to a flight's route.
    ///
    /// # Returns
    /// - `Ok(FlightPathStop)` - The added route entry
    /// - `Err(AppError::BadRequest)` - Unknown flight, unknown city, or the city is already
    ///   on the route
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_stop(&self, stop: FlightPathStop) -> Result<FlightPathStop, AppError> {
        ReferenceGuard::new(self.db)
            .require(&[Reference::Flight(stop.flight_num), Reference::City(stop.city_id)])
            .await?;

        let repo = FlightPathRepository::new(self.db);
        if repo.exists(stop.flight_num, stop.city_id).await? {
            return Err(already_on_path(&stop));
        }

        let created = repo
            .create(&stop)
            .await
            .map_err(|e| AppError::from_insert(e, || already_on_path(&stop)))?;

        tracing::info!(
            "Added city {} to the path of flight {}",
            created.city_id,
            created.flight_num
        );

        Ok(created)
    }
}

fn already_on_path(stop: &FlightPathStop) -> AppError {
    AppError::BadRequest(format!(
        "City ID {} is already on the path of flight {}",
        stop.city_id, stop.flight_num
    ))
}
