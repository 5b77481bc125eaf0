//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the airline operations
//! service, including API endpoints, business logic and data access. The backend uses Axum
//! as the web framework and SeaORM over Sqlite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Guard** (`guard`) - Existence and rating checks run before dependent inserts
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state handed to every handler
//! - **Startup** (`startup`) - Database connection, migrations and demo data
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses the body, converts the DTO to params (rejecting missing fields)
//! 3. **Service** runs reference checks and writes, inside a transaction when several rows change
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod guard;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
