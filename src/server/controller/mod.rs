//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter types, call the matching service and
//! convert the returned domain models back into response DTOs. Each module exposes a tag
//! constant used to group its endpoints in the OpenAPI document.

pub mod airplane;
pub mod auth;
pub mod city;
pub mod flight;
pub mod flight_crew;
pub mod flight_path;
pub mod passenger;
pub mod staff;
