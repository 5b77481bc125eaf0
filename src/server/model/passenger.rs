//! Passenger domain models and parameters.
//!
//! The passenger's username is the primary key. Password hashes never leave the data and
//! service layers; `Passenger` carries only public profile fields.

use crate::{
    model::{
        api::ResponseStatus,
        passenger::{CreatePassengerDto, LoginDto, LoginSuccessDto, PassengerCreatedDto},
    },
    server::{error::AppError, model::contact::ContactDetails, util::validate::non_blank},
};

/// Registered passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    /// Username chosen at registration.
    pub id: String,
    pub first_name: String,
    pub surname: String,
}

impl Passenger {
    pub fn from_entity(entity: entity::passenger::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            surname: entity.surname,
        }
    }

    pub fn into_created_dto(self) -> PassengerCreatedDto {
        PassengerCreatedDto {
            message: "Passenger and contact added successfully".to_string(),
            status: ResponseStatus::Success,
            id: self.id,
        }
    }

    pub fn into_login_dto(self) -> LoginSuccessDto {
        LoginSuccessDto {
            message: "Login successful".to_string(),
            status: ResponseStatus::Success,
            username: self.id,
        }
    }
}

/// Parameters for registering a passenger with their contact details.
#[derive(Debug, Clone)]
pub struct CreatePassengerParams {
    pub username: String,
    pub first_name: String,
    pub surname: String,
    /// Plaintext password; hashed by the service before it is stored.
    pub password: String,
    pub contact: ContactDetails,
}

impl CreatePassengerParams {
    /// Converts the request DTO, rejecting it when any field is missing.
    pub fn from_dto(dto: CreatePassengerDto) -> Result<Self, AppError> {
        Ok(Self {
            username: non_blank(dto.username).ok_or_else(AppError::missing_fields)?,
            first_name: non_blank(dto.first_name).ok_or_else(AppError::missing_fields)?,
            surname: non_blank(dto.surname).ok_or_else(AppError::missing_fields)?,
            password: non_blank(dto.password).ok_or_else(AppError::missing_fields)?,
            contact: ContactDetails {
                home_address: non_blank(dto.home_address).ok_or_else(AppError::missing_fields)?,
                work_address: non_blank(dto.work_address).ok_or_else(AppError::missing_fields)?,
                home_phone: non_blank(dto.home_phone_number)
                    .ok_or_else(AppError::missing_fields)?,
                work_phone: non_blank(dto.work_phone_number)
                    .ok_or_else(AppError::missing_fields)?,
            },
        })
    }
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest("Username and password are required".to_string());

        Ok(Self {
            username: non_blank(dto.username).ok_or_else(missing)?,
            password: non_blank(dto.password).ok_or_else(missing)?,
        })
    }
}
