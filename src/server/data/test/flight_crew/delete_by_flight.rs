use super::*;

/// Tests removing every crew assignment of one flight.
///
/// Verifies that assignments on other flights are kept.
///
/// Expected: Ok with the number of removed rows
#[tokio::test]
async fn removes_only_that_flights_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (airplane, staff, _pilot, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let other = factory::create_flight(db, airplane.serial_number).await?;
    let attendant = factory::create_staff(db).await?;
    factory::create_crew_assignment(db, &attendant.id, flight.flight_num).await?;
    factory::create_crew_assignment(db, &staff.id, other.flight_num).await?;

    let repo = FlightCrewRepository::new(db);
    let removed = repo.delete_by_flight(flight.flight_num).await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::FlightCrew::find()
        .filter(entity::flight_crew::Column::FlightNum.eq(flight.flight_num))
        .all(db)
        .await?;
    assert!(remaining.is_empty());
    assert!(repo.exists(&staff.id, other.flight_num).await?);

    Ok(())
}
