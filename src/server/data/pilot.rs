use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::staff::{CreatePilotParams, Pilot};

pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a type rating for an existing staff member.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The inserted pilot row
    /// - `Err(DbErr)` - Database error, including a unique violation when the staff member
    ///   is already a pilot
    pub async fn create(&self, params: CreatePilotParams) -> Result<Pilot, DbErr> {
        let entity = entity::pilot::ActiveModel {
            staff_id: ActiveValue::Set(params.staff_id),
            type_rating: ActiveValue::Set(params.type_rating.into_inner()),
        }
        .insert(self.db)
        .await?;

        Ok(Pilot::from_entity(entity))
    }

    /// Finds the pilot row of a staff member.
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Staff member is a pilot
    /// - `Ok(None)` - Staff member does not exist or holds no rating
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_staff_id(&self, staff_id: &str) -> Result<Option<Pilot>, DbErr> {
        let entity = entity::prelude::Pilot::find_by_id(staff_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Pilot::from_entity))
    }
}
