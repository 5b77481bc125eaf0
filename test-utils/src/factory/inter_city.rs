//! City factory for creating test inter-city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    country: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - id: assigned by the database
    /// - name: `"City {id}"`
    /// - country: `"UK"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("City {}", next_id()),
            country: "UK".to_string(),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    pub async fn build(self) -> Result<entity::inter_city::Model, DbErr> {
        entity::inter_city::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
            country: ActiveValue::Set(self.country),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::inter_city::Model, DbErr> {
    CityFactory::new(db).build().await
}
