//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Reference checks, rating rules and staff ID generation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Grouping multi-step writes so they commit or roll back together
//!
//! Writes that touch more than one row open a `DatabaseTransaction` and pass it to every
//! repository involved. A transaction dropped without `commit()` rolls back, so returning
//! early with `?` never leaves partial state behind.

pub mod airplane;
pub mod auth;
pub mod booking;
pub mod city;
pub mod flight;
pub mod flight_crew;
pub mod flight_path;
pub mod passenger;
pub mod seed;
pub mod staff;

#[cfg(test)]
mod test;
