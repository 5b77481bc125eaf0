//! Staff and pilot domain models and parameters.
//!
//! Staff IDs are generated from the member's name when they are created (see
//! `StaffService::create`), so `CreateStaffParams` carries no ID. A pilot is a staff member
//! with an additional type rating row.

use crate::{
    model::{
        api::ResponseStatus,
        staff::{CreatePilotDto, CreateStaffDto, PilotCreatedDto, StaffCreatedDto},
    },
    server::{
        error::AppError,
        model::{contact::ContactDetails, rating::TypeRating},
        util::validate::{non_blank, non_zero_amount},
    },
};

/// Staff member employed by the airline.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    /// Generated staff ID such as `"jsmith"` or `"jsmith2"`.
    pub id: String,
    pub first_name: String,
    pub surname: String,
    pub salary: f64,
}

impl Staff {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::staff::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            surname: entity.surname,
            salary: entity.salary,
        }
    }

    pub fn into_created_dto(self) -> StaffCreatedDto {
        StaffCreatedDto {
            message: "Staff and contact added successfully".to_string(),
            status: ResponseStatus::Success,
            id: self.id,
        }
    }
}

/// Parameters for creating a staff member together with their contact row.
#[derive(Debug, Clone)]
pub struct CreateStaffParams {
    pub first_name: String,
    pub surname: String,
    pub salary: f64,
    pub contact: ContactDetails,
}

impl CreateStaffParams {
    /// Converts the request DTO, rejecting it when any field is missing.
    ///
    /// A salary of zero is treated as missing.
    ///
    /// # Returns
    /// - `Ok(CreateStaffParams)` - Every field present
    /// - `Err(AppError::BadRequest)` - At least one field absent, blank, or zero
    pub fn from_dto(dto: CreateStaffDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: non_blank(dto.first_name).ok_or_else(AppError::missing_fields)?,
            surname: non_blank(dto.surname).ok_or_else(AppError::missing_fields)?,
            salary: non_zero_amount(dto.salary).ok_or_else(AppError::missing_fields)?,
            contact: ContactDetails {
                home_address: non_blank(dto.home_address).ok_or_else(AppError::missing_fields)?,
                work_address: non_blank(dto.work_address).ok_or_else(AppError::missing_fields)?,
                home_phone: non_blank(dto.home_phone_num).ok_or_else(AppError::missing_fields)?,
                work_phone: non_blank(dto.work_phone_num).ok_or_else(AppError::missing_fields)?,
            },
        })
    }
}

/// Staff member qualified to fly airplanes up to their type rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pilot {
    pub staff_id: String,
    pub type_rating: TypeRating,
}

impl Pilot {
    pub fn from_entity(entity: entity::pilot::Model) -> Self {
        Self {
            staff_id: entity.staff_id,
            type_rating: TypeRating::new(entity.type_rating),
        }
    }

    pub fn into_created_dto(self) -> PilotCreatedDto {
        PilotCreatedDto {
            message: "Pilot added successfully".to_string(),
            status: ResponseStatus::Success,
            id: self.staff_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePilotParams {
    pub staff_id: String,
    pub type_rating: TypeRating,
}

impl CreatePilotParams {
    pub fn from_dto(dto: CreatePilotDto) -> Result<Self, AppError> {
        Ok(Self {
            staff_id: non_blank(dto.staff_id).ok_or_else(AppError::missing_fields)?,
            type_rating: non_blank(dto.type_rating)
                .map(TypeRating::new)
                .ok_or_else(AppError::missing_fields)?,
        })
    }
}
