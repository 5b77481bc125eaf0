//! Pilot factory for promoting test staff to pilots.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating pilot rows for an existing staff member.
pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    staff_id: String,
    type_rating: String,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with type rating `"A"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `staff_id` - ID of the staff member being registered as a pilot
    pub fn new(db: &'a DatabaseConnection, staff_id: impl Into<String>) -> Self {
        Self {
            db,
            staff_id: staff_id.into(),
            type_rating: "A".to_string(),
        }
    }

    pub fn type_rating(mut self, type_rating: impl Into<String>) -> Self {
        self.type_rating = type_rating.into();
        self
    }

    /// Builds and inserts the pilot entity into the database.
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            staff_id: ActiveValue::Set(self.staff_id),
            type_rating: ActiveValue::Set(self.type_rating),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `"A"`-rated pilot for the given staff member.
pub async fn create_pilot(
    db: &DatabaseConnection,
    staff_id: impl Into<String>,
) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db, staff_id).build().await
}
