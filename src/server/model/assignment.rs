//! Link rows between flights and the staff, cities and passengers attached to them.
//!
//! Each link is keyed by both referenced IDs, so the same pair can only be linked once.

use crate::{
    model::{
        api::ResponseStatus,
        flight::{
            CreateCrewAssignmentDto, CreateFlightPathDto, CrewAssignmentCreatedDto,
            FlightPathCreatedDto,
        },
        passenger::{BookingCreatedDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        util::validate::{non_blank, non_zero},
    },
};

/// Staff member assigned to work a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewAssignment {
    pub staff_id: String,
    pub flight_num: i64,
}

impl CrewAssignment {
    /// Converts the request DTO, rejecting it when either key is missing.
    pub fn from_dto(dto: CreateCrewAssignmentDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest("Both staffID and flightNum are required".to_string());

        Ok(Self {
            staff_id: non_blank(dto.staff_id).ok_or_else(missing)?,
            flight_num: non_zero(dto.flight_num).ok_or_else(missing)?,
        })
    }

    pub fn from_entity(entity: entity::flight_crew::Model) -> Self {
        Self {
            staff_id: entity.staff_id,
            flight_num: entity.flight_num,
        }
    }

    pub fn into_created_dto(self) -> CrewAssignmentCreatedDto {
        CrewAssignmentCreatedDto {
            message: "Crew member added to flight successfully".to_string(),
            status: ResponseStatus::Success,
            staff_id: self.staff_id,
            flight_num: self.flight_num,
        }
    }
}

/// City a flight passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPathStop {
    pub flight_num: i64,
    pub city_id: i32,
}

impl FlightPathStop {
    /// Converts the request DTO, rejecting it when either key is missing.
    pub fn from_dto(dto: CreateFlightPathDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest("Both flightNum and cityID are required".to_string());

        let flight_num = non_zero(dto.flight_num).ok_or_else(missing)?;
        let city_id = non_zero(dto.city_id).ok_or_else(missing)?;
        let city_id = i32::try_from(city_id)
            .map_err(|_| AppError::BadRequest(format!("City ID {} does not exist", city_id)))?;

        Ok(Self {
            flight_num,
            city_id,
        })
    }

    pub fn from_entity(entity: entity::flight_path::Model) -> Self {
        Self {
            flight_num: entity.flight_num,
            city_id: entity.city_id,
        }
    }

    pub fn into_created_dto(self) -> FlightPathCreatedDto {
        FlightPathCreatedDto {
            message: "Flight path added successfully".to_string(),
            status: ResponseStatus::Success,
            flight_num: self.flight_num,
            city_id: self.city_id,
        }
    }
}

/// Seat reservation of a passenger on a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub passenger_id: String,
    pub flight_num: i64,
}

impl Booking {
    /// Converts the request DTO, rejecting it when either key is missing.
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, AppError> {
        let missing =
            || AppError::BadRequest("Both passengerID and flightNum are required".to_string());

        Ok(Self {
            passenger_id: non_blank(dto.passenger_id).ok_or_else(missing)?,
            flight_num: non_zero(dto.flight_num).ok_or_else(missing)?,
        })
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            passenger_id: entity.passenger_id,
            flight_num: entity.flight_num,
        }
    }

    pub fn into_created_dto(self) -> BookingCreatedDto {
        BookingCreatedDto {
            message: "Booking added successfully".to_string(),
            status: ResponseStatus::Success,
            passenger_id: self.passenger_id,
            flight_num: self.flight_num,
        }
    }
}
