use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::ResponseStatus, lenient::deserialize_optional_i64};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFlightDto {
    #[serde(
        rename = "flightNum",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub flight_num: Option<i64>,
    #[serde(
        rename = "numSer",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub serial_number: Option<i64>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "arrTime")]
    pub arrival_time: Option<String>,
    #[serde(rename = "departureTime")]
    pub departure_time: Option<String>,
    #[serde(rename = "pilotID")]
    pub pilot_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    #[serde(rename = "flightNum")]
    pub flight_num: i64,
    #[serde(rename = "pilotID")]
    pub pilot_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummaryDto {
    pub flight_number: i64,
    pub origin: String,
    pub destination: String,
    pub arrival_time: String,
    pub departure_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightListDto {
    pub flights: Vec<FlightSummaryDto>,
    pub status: ResponseStatus,
}

/// Optional exact-match filters for `GET /api/flights`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlightFilterQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCrewAssignmentDto {
    #[serde(rename = "staffID")]
    pub staff_id: Option<String>,
    #[serde(
        rename = "flightNum",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub flight_num: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CrewAssignmentCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    #[serde(rename = "staffID")]
    pub staff_id: String,
    #[serde(rename = "flightNum")]
    pub flight_num: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFlightPathDto {
    #[serde(
        rename = "flightNum",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub flight_num: Option<i64>,
    #[serde(
        rename = "cityID",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub city_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightPathCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    #[serde(rename = "flightNum")]
    pub flight_num: i64,
    #[serde(rename = "cityID")]
    pub city_id: i32,
}
