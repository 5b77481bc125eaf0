use crate::server::{
    data::airplane::AirplaneRepository,
    error::is_unique_violation,
    model::{airplane::CreateAirplaneParams, rating::TypeRating},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_by_serial_number;
