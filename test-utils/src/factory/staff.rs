//! Staff factory for creating test staff entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
///
/// Inserts only the staff row; contact details are not required by any reference check.
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    first_name: String,
    surname: String,
    salary: f64,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - id: `"staff{id}"` where id is auto-incremented
    /// - first_name: `"Test"`
    /// - surname: `"Staff{id}"`
    /// - salary: `50000.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("staff{}", id),
            first_name: "Test".to_string(),
            surname: format!("Staff{}", id),
            salary: 50000.0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            id: ActiveValue::Set(self.id),
            first_name: ActiveValue::Set(self.first_name),
            surname: ActiveValue::Set(self.surname),
            salary: ActiveValue::Set(self.salary),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with default values.
pub async fn create_staff(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).build().await
}
