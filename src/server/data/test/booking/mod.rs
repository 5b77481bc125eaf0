use crate::server::{
    data::booking::BookingRepository, error::is_unique_violation, model::assignment::Booking,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_flight;
