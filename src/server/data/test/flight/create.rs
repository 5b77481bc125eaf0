use super::*;

/// Tests inserting a flight for an existing airplane.
///
/// Verifies that times are stored exactly as given.
///
/// Expected: Ok with flight stored
#[tokio::test]
async fn creates_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;

    let repo = FlightRepository::new(db);
    let flight = repo.create(&flight_params(501, airplane.serial_number)).await?;

    assert_eq!(flight.flight_num, 501);
    assert_eq!(flight.serial_number, airplane.serial_number);

    let stored = entity::prelude::Flight::find_by_id(501).one(db).await?.unwrap();
    assert_eq!(stored.departure_time, "2024-06-01 11:00:00");
    assert_eq!(stored.arrival_time, "2024-06-01 12:30:00");

    Ok(())
}

/// Tests inserting a flight with a number already in use.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let existing = factory::create_flight(db, airplane.serial_number).await?;

    let repo = FlightRepository::new(db);
    let result = repo
        .create(&flight_params(existing.flight_num, airplane.serial_number))
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests inserting a flight for an airplane that does not exist.
///
/// Verifies that the airplane foreign key rejects the row.
///
/// Expected: Err, no flight stored
#[tokio::test]
async fn fails_for_unknown_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let result = repo.create(&flight_params(502, 424_242)).await;

    assert!(result.is_err());
    assert!(!repo.exists(502).await?);

    Ok(())
}
