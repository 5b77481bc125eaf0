use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::{
    contact::ContactDetails,
    staff::{CreateStaffParams, Staff},
};

pub struct StaffRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a staff member and their contact row.
    ///
    /// Performs two inserts; callers run this inside a transaction so a failed contact insert
    /// does not leave a staff row without contact details.
    ///
    /// # Arguments
    /// - `id` - Staff ID, already checked to be free
    /// - `params` - Name, salary and contact details
    ///
    /// # Returns
    /// - `Ok(Staff)` - The inserted staff member
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, id: String, params: CreateStaffParams) -> Result<Staff, DbErr> {
        let staff = entity::staff::ActiveModel {
            id: ActiveValue::Set(id),
            first_name: ActiveValue::Set(params.first_name),
            surname: ActiveValue::Set(params.surname),
            salary: ActiveValue::Set(params.salary),
        }
        .insert(self.db)
        .await?;

        self.add_contact(&staff.id, params.contact).await?;

        Ok(Staff::from_entity(staff))
    }

    /// Inserts a contact row for an existing staff member.
    pub async fn add_contact(
        &self,
        staff_id: &str,
        contact: ContactDetails,
    ) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            staff_id: ActiveValue::Set(staff_id.to_string()),
            home_address: ActiveValue::Set(contact.home_address),
            work_address: ActiveValue::Set(contact.work_address),
            home_phone: ActiveValue::Set(contact.home_phone),
            work_phone: ActiveValue::Set(contact.work_phone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a staff member by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Staff))` - Staff member found
    /// - `Ok(None)` - No staff member with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Staff>, DbErr> {
        let entity = entity::prelude::Staff::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Staff::from_entity))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
