//! API data transfer objects.
//!
//! Request and response bodies exchanged over the JSON API. Field names follow the wire
//! format used by the web client (`camelCase`, with `ID` suffixes where the client expects
//! them). Request DTOs hold every field as `Option` so that missing values can be reported
//! as a single validation error by the server layer.

pub mod airplane;
pub mod api;
pub mod city;
pub mod flight;
pub mod lenient;
pub mod passenger;
pub mod staff;
