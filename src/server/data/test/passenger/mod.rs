use crate::server::{
    data::passenger::PassengerRepository, error::is_unique_violation,
    model::contact::ContactDetails,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_password_hash;

fn contact() -> ContactDetails {
    ContactDetails {
        home_address: "1 Dock Road".to_string(),
        work_address: "2 Quay Street".to_string(),
        home_phone: "0111".to_string(),
        work_phone: "0222".to_string(),
    }
}
