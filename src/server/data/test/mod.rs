mod airplane;
mod booking;
mod city;
mod flight;
mod flight_crew;
mod flight_path;
mod passenger;
mod pilot;
mod staff;
