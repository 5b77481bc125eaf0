use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::ResponseStatus, flight::FlightSummaryDto, lenient::deserialize_optional_i64,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassengerDto {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub password: Option<String>,
    pub home_address: Option<String>,
    pub work_address: Option<String>,
    pub home_phone_number: Option<String>,
    pub work_phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassengerCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    #[serde(rename = "passengerID")]
    pub passenger_id: Option<String>,
    #[serde(
        rename = "flightNum",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub flight_num: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    #[serde(rename = "passengerID")]
    pub passenger_id: String,
    #[serde(rename = "flightNum")]
    pub flight_num: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingListDto {
    pub bookings: Vec<FlightSummaryDto>,
    pub status: ResponseStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginSuccessDto {
    pub message: String,
    pub status: ResponseStatus,
    pub username: String,
}
