use crate::server::{
    data::flight_path::FlightPathRepository, error::is_unique_violation,
    model::assignment::FlightPathStop,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_flight;
