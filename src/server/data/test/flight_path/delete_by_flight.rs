use super::*;

/// Tests clearing a flight's path.
///
/// Expected: Ok(1), no stops left for the flight
#[tokio::test]
async fn clears_path_of_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let city = factory::create_city(db).await?;
    factory::create_flight_path(db, flight.flight_num, city.id).await?;

    let repo = FlightPathRepository::new(db);

    assert_eq!(repo.delete_by_flight(flight.flight_num).await?, 1);
    assert!(!repo.exists(flight.flight_num, city.id).await?);

    Ok(())
}
