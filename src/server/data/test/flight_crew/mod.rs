use crate::server::{data::flight_crew::FlightCrewRepository, error::is_unique_violation};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_flight;
