//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that reference other rows take the referenced
//! keys as constructor arguments, so tests create parents first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let airplane = factory::create_airplane(&db).await?;
//!     let staff = factory::create_staff(&db).await?;
//!
//!     // Create with all dependencies
//!     let (airplane, staff, pilot, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airplane = factory::airplane::AirplaneFactory::new(&db)
//!     .serial_number(737)
//!     .type_rating("C")
//!     .build()
//!     .await?;
//! ```

pub mod airplane;
pub mod assignment;
pub mod flight;
pub mod helpers;
pub mod inter_city;
pub mod passenger;
pub mod pilot;
pub mod staff;

// Re-export commonly used factory functions for concise usage
pub use airplane::create_airplane;
pub use assignment::{create_booking, create_crew_assignment, create_flight_path};
pub use flight::create_flight;
pub use inter_city::create_city;
pub use passenger::create_passenger;
pub use pilot::create_pilot;
pub use staff::create_staff;
