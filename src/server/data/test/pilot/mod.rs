use crate::server::{
    data::pilot::PilotRepository,
    error::is_unique_violation,
    model::{rating::TypeRating, staff::CreatePilotParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
