//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each table
//! in the application. Repositories use SeaORM entity models internally and return domain
//! models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same repository runs against
//! the connection pool for single statements and against a `DatabaseTransaction` when a
//! service groups several writes into one all-or-nothing unit.

pub mod airplane;
pub mod booking;
pub mod city;
pub mod flight;
pub mod flight_crew;
pub mod flight_path;
pub mod passenger;
pub mod pilot;
pub mod staff;

#[cfg(test)]
mod test;
