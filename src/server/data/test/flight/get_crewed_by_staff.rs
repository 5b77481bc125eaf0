use super::*;

/// Tests listing the flights a staff member works on.
///
/// Expected: Ok with the assigned flights in flight number order
#[tokio::test]
async fn lists_assigned_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (airplane, staff, _pilot, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let later = factory::flight::FlightFactory::new(db, airplane.serial_number)
        .flight_num(flight.flight_num + 1000)
        .build()
        .await?;
    factory::create_crew_assignment(db, &staff.id, later.flight_num).await?;

    let repo = FlightRepository::new(db);
    let flights = repo.get_crewed_by_staff(&staff.id).await?;

    let numbers: Vec<i64> = flights.iter().map(|f| f.flight_num).collect();
    assert_eq!(numbers, vec![flight.flight_num, later.flight_num]);

    Ok(())
}
