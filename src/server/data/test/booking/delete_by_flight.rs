use super::*;

/// Tests removing every booking on a flight.
///
/// Verifies that the same passenger's booking on another flight survives.
///
/// Expected: Ok(2)
#[tokio::test]
async fn removes_bookings_for_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let other = factory::create_flight(db, airplane.serial_number).await?;
    let first = factory::create_passenger(db).await?;
    let second = factory::create_passenger(db).await?;
    factory::create_booking(db, &first.id, flight.flight_num).await?;
    factory::create_booking(db, &second.id, flight.flight_num).await?;
    factory::create_booking(db, &first.id, other.flight_num).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.delete_by_flight(flight.flight_num).await?, 2);
    assert!(!repo.exists(&first.id, flight.flight_num).await?);
    assert!(repo.exists(&first.id, other.flight_num).await?);

    Ok(())
}
