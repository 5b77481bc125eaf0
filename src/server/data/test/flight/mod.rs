use crate::server::{
    data::flight::FlightRepository,
    error::is_unique_violation,
    model::flight::{CreateFlightParams, FlightFilter},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_booked_by_passenger;
mod get_crewed_by_staff;
mod get_filtered;
mod search_by_number;

fn flight_params(flight_num: i64, serial_number: i64) -> CreateFlightParams {
    CreateFlightParams {
        flight_num,
        serial_number,
        origin: "Bristol".to_string(),
        destination: "Belfast".to_string(),
        arrival_time: "2024-06-01 12:30:00".to_string(),
        departure_time: "2024-06-01 11:00:00".to_string(),
        pilot_id: "unused".to_string(),
    }
}
