use crate::server::{
    data::city::CityRepository, error::is_unique_violation, model::city::CreateCityParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
