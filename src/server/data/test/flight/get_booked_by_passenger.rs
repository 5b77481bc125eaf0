use super::*;

/// Tests listing the flights a passenger has booked.
///
/// Verifies that other passengers' bookings are excluded.
///
/// Expected: Ok with the passenger's flights only
#[tokio::test]
async fn lists_only_the_passengers_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let first = factory::create_flight(db, airplane.serial_number).await?;
    let second = factory::create_flight(db, airplane.serial_number).await?;
    let alice = factory::create_passenger(db).await?;
    let bob = factory::create_passenger(db).await?;

    factory::create_booking(db, &alice.id, first.flight_num).await?;
    factory::create_booking(db, &bob.id, second.flight_num).await?;

    let repo = FlightRepository::new(db);
    let flights = repo.get_booked_by_passenger(&alice.id).await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].flight_num, first.flight_num);
    assert!(repo.get_booked_by_passenger("nobody").await?.is_empty());

    Ok(())
}
