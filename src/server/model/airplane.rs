//! Airplane domain models and parameters.

use crate::{
    model::{
        airplane::{AirplaneCreatedDto, CreateAirplaneDto},
        api::ResponseStatus,
    },
    server::{
        error::AppError,
        model::rating::TypeRating,
        util::validate::{non_blank, non_zero},
    },
};

/// Airplane in the fleet, identified by its serial number.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub serial_number: i64,
    pub manufacturer: String,
    pub model_number: String,
    /// Highest pilot rating allowed to fly this airplane.
    pub type_rating: TypeRating,
}

impl Airplane {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::airplane::Model) -> Self {
        Self {
            serial_number: entity.serial_number,
            manufacturer: entity.manufacturer,
            model_number: entity.model_number,
            type_rating: TypeRating::new(entity.type_rating),
        }
    }

    /// Converts the created airplane into the creation response DTO.
    pub fn into_created_dto(self) -> AirplaneCreatedDto {
        AirplaneCreatedDto {
            message: "Airplane added successfully".to_string(),
            status: ResponseStatus::Success,
            id: self.serial_number,
        }
    }
}

/// Parameters for registering a new airplane.
#[derive(Debug, Clone)]
pub struct CreateAirplaneParams {
    pub serial_number: i64,
    pub manufacturer: String,
    pub model_number: String,
    pub type_rating: TypeRating,
}

impl CreateAirplaneParams {
    /// Converts the request DTO, rejecting it when any field is missing.
    ///
    /// # Returns
    /// - `Ok(CreateAirplaneParams)` - Every field present
    /// - `Err(AppError::BadRequest)` - At least one field absent, blank, or zero
    pub fn from_dto(dto: CreateAirplaneDto) -> Result<Self, AppError> {
        Ok(Self {
            serial_number: non_zero(dto.serial_number).ok_or_else(AppError::missing_fields)?,
            manufacturer: non_blank(dto.manufacturer).ok_or_else(AppError::missing_fields)?,
            model_number: non_blank(dto.model_number).ok_or_else(AppError::missing_fields)?,
            type_rating: non_blank(dto.type_rating)
                .map(TypeRating::new)
                .ok_or_else(AppError::missing_fields)?,
        })
    }
}
