//! Demo data for local development.
//!
//! Populates an empty database with a small fleet, UK cities, pilots, passengers and a
//! batch of randomly routed flights. Random choices are made up front by `DemoPlan` and
//! written afterwards in a single transaction.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime, Utc};
use rand::{
    seq::{index::sample, IndexedRandom},
    Rng,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        airplane::AirplaneRepository, booking::BookingRepository, city::CityRepository,
        flight::FlightRepository, flight_crew::FlightCrewRepository,
        flight_path::FlightPathRepository, passenger::PassengerRepository,
        pilot::PilotRepository, staff::StaffRepository,
    },
    error::AppError,
    model::{
        airplane::CreateAirplaneParams,
        assignment::{Booking, FlightPathStop},
        city::CreateCityParams,
        contact::ContactDetails,
        flight::CreateFlightParams,
        rating::TypeRating,
        staff::{CreatePilotParams, CreateStaffParams},
    },
    util::password::hash_password,
};

pub const UK_CITIES: [&str; 15] = [
    "London",
    "Manchester",
    "Liverpool",
    "Birmingham",
    "Leeds",
    "Glasgow",
    "Edinburgh",
    "Bristol",
    "Cardiff",
    "Belfast",
    "Newcastle",
    "Sheffield",
    "Nottingham",
    "Leicester",
    "Brighton",
];

pub const DEMO_FLIGHT_COUNT: i64 = 100;
pub const DEMO_BOOKING_COUNT: usize = 100;
/// Password shared by every demo passenger.
pub const DEMO_PASSWORD: &str = "password";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const AIRPLANES: [(i64, &str, &str, &str); 5] = [
    (1, "Boeing", "737", "A"),
    (2, "Airbus", "A320", "B"),
    (3, "Boeing", "747", "C"),
    (4, "Airbus", "A380", "D"),
    (5, "Embraer", "E190", "E"),
];

/// (home address, work address, home phone, work phone)
type ContactRow = (&'static str, &'static str, &'static str, &'static str);

const STAFF: [(&str, &str, &str, f64, ContactRow); 5] = [
    ("S001", "John", "Doe", 70000.0, ("123 Elm St", "456 Oak St", "555-1234", "555-5678")),
    ("S002", "Jane", "Smith", 75000.0, ("789 Pine St", "101 Maple St", "555-8765", "555-4321")),
    ("S003", "Jim", "Brown", 60000.0, ("234 Birch St", "567 Cedar St", "555-3456", "555-6789")),
    ("S004", "Jack", "White", 80000.0, ("890 Spruce St", "321 Fir St", "555-6543", "555-9876")),
    ("S005", "Jill", "Green", 72000.0, ("456 Aspen St", "678 Redwood St", "555-9876", "555-1234")),
];

const PASSENGERS: [(&str, &str, &str, ContactRow); 5] = [
    ("P001", "Alice", "Johnson", ("789 Apple St", "123 Peach St", "555-6789", "555-1234")),
    ("P002", "Bob", "Lee", ("456 Banana St", "789 Grape St", "555-8765", "555-4321")),
    ("P003", "Charlie", "Kim", ("123 Cherry St", "456 Lime St", "555-3456", "555-6789")),
    ("P004", "Diana", "Wang", ("789 Fig St", "123 Plum St", "555-6543", "555-9876")),
    ("P005", "Ethan", "Clark", ("456 Kiwi St", "789 Pear St", "555-9876", "555-1234")),
];

fn contact(row: ContactRow) -> ContactDetails {
    ContactDetails {
        home_address: row.0.to_string(),
        work_address: row.1.to_string(),
        home_phone: row.2.to_string(),
        work_phone: row.3.to_string(),
    }
}

/// Randomly generated part of the demo data.
pub struct DemoPlan {
    pub flights: Vec<DemoFlight>,
    pub bookings: Vec<Booking>,
}

pub struct DemoFlight {
    pub params: CreateFlightParams,
    /// City IDs on the route; a city's ID is its position in `UK_CITIES` plus one.
    pub path: Vec<i32>,
}

impl DemoPlan {
    /// Generates flights departing hourly from `start`.
    ///
    /// Each flight gets two distinct cities as origin and destination, a random airplane, a
    /// random pilot, an arrival one to five hours after departure and a route through two to
    /// four cities. Bookings pair random passengers with random flights without repeats.
    pub fn generate(start: NaiveDateTime) -> Self {
        let mut rng = rand::rng();
        let mut departure = start;
        let mut flights = Vec::with_capacity(DEMO_FLIGHT_COUNT as usize);

        for flight_num in 1..=DEMO_FLIGHT_COUNT {
            let route: Vec<&&str> = UK_CITIES.choose_multiple(&mut rng, 2).collect();
            let arrival = departure + Duration::hours(rng.random_range(1..=5));
            let airplane = AIRPLANES[rng.random_range(0..AIRPLANES.len())];
            let pilot = STAFF[rng.random_range(0..STAFF.len())];

            let stops = rng.random_range(2..=4);
            let path = sample(&mut rng, UK_CITIES.len(), stops)
                .into_iter()
                .map(|index| index as i32 + 1)
                .collect();

            flights.push(DemoFlight {
                params: CreateFlightParams {
                    flight_num,
                    serial_number: airplane.0,
                    origin: route[0].to_string(),
                    destination: route[1].to_string(),
                    arrival_time: arrival.format(TIME_FORMAT).to_string(),
                    departure_time: departure.format(TIME_FORMAT).to_string(),
                    pilot_id: pilot.0.to_string(),
                },
                path,
            });

            departure += Duration::hours(1);
        }

        let mut booked = HashSet::new();
        let mut bookings = Vec::with_capacity(DEMO_BOOKING_COUNT);
        while bookings.len() < DEMO_BOOKING_COUNT {
            let passenger = PASSENGERS[rng.random_range(0..PASSENGERS.len())].0;
            let flight_num = rng.random_range(1..=DEMO_FLIGHT_COUNT);

            if booked.insert((passenger, flight_num)) {
                bookings.push(Booking {
                    passenger_id: passenger.to_string(),
                    flight_num,
                });
            }
        }

        Self { flights, bookings }
    }
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the demo data set unless airplanes already exist.
    ///
    /// # Returns
    /// - `Ok(true)` - Demo data inserted
    /// - `Ok(false)` - Database already populated, nothing written
    /// - `Err(AppError)` - Hashing or database error; nothing is written
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        if AirplaneRepository::new(self.db).count().await? > 0 {
            return Ok(false);
        }

        let plan = DemoPlan::generate(Utc::now().naive_utc());
        let password_hash = hash_password(DEMO_PASSWORD)?;

        let txn = self.db.begin().await?;

        for (serial_number, manufacturer, model_number, rating) in AIRPLANES {
            AirplaneRepository::new(&txn)
                .create(CreateAirplaneParams {
                    serial_number,
                    manufacturer: manufacturer.to_string(),
                    model_number: model_number.to_string(),
                    type_rating: TypeRating::new(rating),
                })
                .await?;
        }

        for (index, name) in UK_CITIES.iter().enumerate() {
            CityRepository::new(&txn)
                .create(CreateCityParams {
                    id: Some(index as i32 + 1),
                    name: name.to_string(),
                    country: "UK".to_string(),
                })
                .await?;
        }

        for (id, first_name, surname, salary, contact_row) in STAFF {
            StaffRepository::new(&txn)
                .create(
                    id.to_string(),
                    CreateStaffParams {
                        first_name: first_name.to_string(),
                        surname: surname.to_string(),
                        salary,
                        contact: contact(contact_row),
                    },
                )
                .await?;

            PilotRepository::new(&txn)
                .create(CreatePilotParams {
                    staff_id: id.to_string(),
                    type_rating: TypeRating::new("A"),
                })
                .await?;
        }

        for flight in &plan.flights {
            FlightRepository::new(&txn).create(&flight.params).await?;
            FlightCrewRepository::new(&txn)
                .create(&flight.params.pilot_id, flight.params.flight_num)
                .await?;

            for city_id in &flight.path {
                FlightPathRepository::new(&txn)
                    .create(&FlightPathStop {
                        flight_num: flight.params.flight_num,
                        city_id: *city_id,
                    })
                    .await?;
            }
        }

        for (id, first_name, surname, contact_row) in PASSENGERS {
            PassengerRepository::new(&txn)
                .create(
                    id.to_string(),
                    first_name.to_string(),
                    surname.to_string(),
                    password_hash.clone(),
                    contact(contact_row),
                )
                .await?;
        }

        for booking in &plan.bookings {
            BookingRepository::new(&txn).create(booking).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Inserted {} airplanes, {} cities, {} pilots, {} flights, {} passengers and {} bookings",
            AIRPLANES.len(),
            UK_CITIES.len(),
            STAFF.len(),
            plan.flights.len(),
            PASSENGERS.len(),
            plan.bookings.len()
        );

        Ok(true)
    }
}
