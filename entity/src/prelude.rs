pub use super::airplane::Entity as Airplane;
pub use super::booking::Entity as Booking;
pub use super::contact::Entity as Contact;
pub use super::flight::Entity as Flight;
pub use super::flight_crew::Entity as FlightCrew;
pub use super::flight_path::Entity as FlightPath;
pub use super::inter_city::Entity as InterCity;
pub use super::passenger::Entity as Passenger;
pub use super::passenger_contact::Entity as PassengerContact;
pub use super::pilot::Entity as Pilot;
pub use super::staff::Entity as Staff;
