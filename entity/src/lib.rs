//! SeaORM entity definitions for the airline operations schema.
//!
//! Each module maps one table created by the `migration` crate. Relations mirror the foreign
//! keys declared there so `Schema::create_table_from_entity` produces the same constraints in
//! test databases.

pub mod prelude;

pub mod airplane;
pub mod booking;
pub mod contact;
pub mod flight;
pub mod flight_crew;
pub mod flight_path;
pub mod inter_city;
pub mod passenger;
pub mod passenger_contact;
pub mod pilot;
pub mod staff;
