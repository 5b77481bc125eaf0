use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        airplane::CreateAirplaneParams,
        assignment::{Booking, CrewAssignment, FlightPathStop},
        contact::ContactDetails,
        flight::CreateFlightParams,
        passenger::{CreatePassengerParams, LoginParams},
        rating::TypeRating,
        staff::{CreatePilotParams, CreateStaffParams},
    },
};


fn contact() -> ContactDetails {
    ContactDetails {
        home_address: "10 High Street".to_string(),
        work_address: "1 Terminal Way".to_string(),
        home_phone: "01234".to_string(),
        work_phone: "05678".to_string(),
    }
}

fn staff_params(first_name: &str, surname: &str) -> CreateStaffParams {
    CreateStaffParams {
        first_name: first_name.to_string(),
        surname: surname.to_string(),
        salary: 42000.0,
        contact: contact(),
    }
}

fn flight_params(flight_num: i64, serial_number: i64, pilot_id: &str) -> CreateFlightParams {
    CreateFlightParams {
        flight_num,
        serial_number,
        origin: "London".to_string(),
        destination: "Edinburgh".to_string(),
        arrival_time: "2024-07-01 09:15:00".to_string(),
        departure_time: "2024-07-01 08:00:00".to_string(),
        pilot_id: pilot_id.to_string(),
    }
}
