use crate::server::{
    data::staff::StaffRepository,
    model::{contact::ContactDetails, staff::CreateStaffParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;

fn staff_params() -> CreateStaffParams {
    CreateStaffParams {
        first_name: "Jane".to_string(),
        surname: "Smith".to_string(),
        salary: 75000.0,
        contact: ContactDetails {
            home_address: "789 Pine St".to_string(),
            work_address: "101 Maple St".to_string(),
            home_phone: "555-8765".to_string(),
            work_phone: "555-4321".to_string(),
        },
    }
}
