//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! airline records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs once, at the controller boundary, and
//! reject missing fields before any database access happens.

pub mod airplane;
pub mod assignment;
pub mod city;
pub mod contact;
pub mod flight;
pub mod passenger;
pub mod rating;
pub mod staff;
