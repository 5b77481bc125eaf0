use sea_orm::DatabaseConnection;

use crate::server::{
    data::city::CityRepository,
    error::AppError,
    model::city::{City, CreateCityParams},
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a city, using the supplied ID when there is one.
    ///
    /// # Returns
    /// - `Ok(City)` - The added city with its final ID
    /// - `Err(AppError::Conflict)` - The supplied ID is already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);

        if let Some(id) = params.id {
            if repo.exists(id).await? {
                return Err(duplicate_city(id));
            }
        }

        let requested_id = params.id;
        let city = repo.create(params).await.map_err(|e| {
            AppError::from_insert(e, || match requested_id {
                Some(id) => duplicate_city(id),
                None => AppError::Conflict("City already exists".to_string()),
            })
        })?;

        tracing::info!("Added city {} ({})", city.id, city.name);

        Ok(city)
    }
}

fn duplicate_city(id: i32) -> AppError {
    AppError::Conflict(format!("City ID {} already exists", id))
}
