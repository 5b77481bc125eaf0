use super::*;

/// Tests deleting a flight without dependents.
///
/// Expected: Ok(1) and the flight is gone
#[tokio::test]
async fn deletes_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;

    let repo = FlightRepository::new(db);
    let deleted = repo.delete(flight.flight_num).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Flight::find_by_id(flight.flight_num)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a flight that still has crew assigned.
///
/// Verifies that the crew foreign key blocks removing the flight row on its own.
///
/// Expected: Err, flight still present
#[tokio::test]
async fn refuses_while_crew_references_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_airplane, _staff, _pilot, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;

    let repo = FlightRepository::new(db);
    let result = repo.delete(flight.flight_num).await;

    assert!(result.is_err());
    assert!(repo.exists(flight.flight_num).await?);

    Ok(())
}

/// Tests deleting a flight number that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);

    assert_eq!(repo.delete(8_888_888).await?, 0);

    Ok(())
}
