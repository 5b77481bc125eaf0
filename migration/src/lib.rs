pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_airplane_table;
mod m20240501_000002_create_inter_city_table;
mod m20240501_000003_create_staff_table;
mod m20240501_000004_create_contact_table;
mod m20240501_000005_create_pilot_table;
mod m20240501_000006_create_flight_table;
mod m20240501_000007_create_flight_crew_table;
mod m20240501_000008_create_flight_path_table;
mod m20240501_000009_create_passenger_table;
mod m20240501_000010_create_passenger_contact_table;
mod m20240501_000011_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_airplane_table::Migration),
            Box::new(m20240501_000002_create_inter_city_table::Migration),
            Box::new(m20240501_000003_create_staff_table::Migration),
            Box::new(m20240501_000004_create_contact_table::Migration),
            Box::new(m20240501_000005_create_pilot_table::Migration),
            Box::new(m20240501_000006_create_flight_table::Migration),
            Box::new(m20240501_000007_create_flight_crew_table::Migration),
            Box::new(m20240501_000008_create_flight_path_table::Migration),
            Box::new(m20240501_000009_create_passenger_table::Migration),
            Box::new(m20240501_000010_create_passenger_contact_table::Migration),
            Box::new(m20240501_000011_create_booking_table::Migration),
        ]
    }
}
