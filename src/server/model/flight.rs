//! Flight domain models and parameters.
//!
//! Arrival and departure times are kept as the opaque strings submitted by clients; they are
//! stored and returned without parsing.

use crate::{
    model::{
        api::ResponseStatus,
        flight::{CreateFlightDto, FlightCreatedDto, FlightFilterQuery, FlightSummaryDto},
    },
    server::{
        error::AppError,
        util::validate::{non_blank, non_zero},
    },
};

/// Scheduled flight flown by a single airplane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub flight_num: i64,
    /// Serial number of the airplane flying this flight.
    pub serial_number: i64,
    pub origin: String,
    pub destination: String,
    pub arrival_time: String,
    pub departure_time: String,
}

impl Flight {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            flight_num: entity.flight_num,
            serial_number: entity.serial_number,
            origin: entity.origin,
            destination: entity.destination,
            arrival_time: entity.arrival_time,
            departure_time: entity.departure_time,
        }
    }

    /// Converts the flight into the summary DTO used by every flight listing.
    pub fn into_summary_dto(self) -> FlightSummaryDto {
        FlightSummaryDto {
            flight_number: self.flight_num,
            origin: self.origin,
            destination: self.destination,
            arrival_time: self.arrival_time,
            departure_time: self.departure_time,
        }
    }
}

/// Flight created together with the crew assignment of its pilot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledFlight {
    pub flight: Flight,
    pub pilot_id: String,
}

impl ScheduledFlight {
    pub fn into_created_dto(self) -> FlightCreatedDto {
        FlightCreatedDto {
            message: "Flight and pilot added successfully".to_string(),
            status: ResponseStatus::Success,
            flight_num: self.flight.flight_num,
            pilot_id: self.pilot_id,
        }
    }
}

/// Parameters for creating a flight and assigning its pilot.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub flight_num: i64,
    pub serial_number: i64,
    pub origin: String,
    pub destination: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub pilot_id: String,
}

impl CreateFlightParams {
    /// Converts the request DTO, rejecting it when any field is missing.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParams)` - Every field present
    /// - `Err(AppError::BadRequest)` - At least one field absent, blank, or zero
    pub fn from_dto(dto: CreateFlightDto) -> Result<Self, AppError> {
        Ok(Self {
            flight_num: non_zero(dto.flight_num).ok_or_else(AppError::missing_fields)?,
            serial_number: non_zero(dto.serial_number).ok_or_else(AppError::missing_fields)?,
            origin: non_blank(dto.origin).ok_or_else(AppError::missing_fields)?,
            destination: non_blank(dto.destination).ok_or_else(AppError::missing_fields)?,
            arrival_time: non_blank(dto.arrival_time).ok_or_else(AppError::missing_fields)?,
            departure_time: non_blank(dto.departure_time).ok_or_else(AppError::missing_fields)?,
            pilot_id: non_blank(dto.pilot_id).ok_or_else(AppError::missing_fields)?,
        })
    }
}

/// Exact-match filters for listing flights; `None` matches every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl FlightFilter {
    /// Builds the filter from query parameters, ignoring blank values.
    pub fn from_query(query: FlightFilterQuery) -> Self {
        Self {
            origin: non_blank(query.origin),
            destination: non_blank(query.destination),
        }
    }
}
