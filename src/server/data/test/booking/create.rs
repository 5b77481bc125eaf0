use super::*;

/// Tests booking a passenger onto a flight.
///
/// Expected: Ok with booking stored
#[tokio::test]
async fn books_passenger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let passenger = factory::create_passenger(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(&Booking {
            passenger_id: passenger.id.clone(),
            flight_num: flight.flight_num,
        })
        .await?;

    assert_eq!(booking.passenger_id, passenger.id);
    assert!(repo.exists(&passenger.id, flight.flight_num).await?);

    Ok(())
}

/// Tests booking the same passenger onto the same flight twice.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let passenger = factory::create_passenger(db).await?;
    factory::create_booking(db, &passenger.id, flight.flight_num).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(&Booking {
            passenger_id: passenger.id,
            flight_num: flight.flight_num,
        })
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
