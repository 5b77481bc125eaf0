use super::*;

/// Tests assigning a second staff member to a flight's crew.
///
/// Expected: Ok with both assignments listed for the flight
#[tokio::test]
async fn assigns_staff_to_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_airplane, pilot_staff, _pilot, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let attendant = factory::create_staff(db).await?;

    let repo = FlightCrewRepository::new(db);
    let assignment = repo.create(&attendant.id, flight.flight_num).await?;

    assert_eq!(assignment.staff_id, attendant.id);
    assert!(repo.exists(&attendant.id, flight.flight_num).await?);

    let mut crew: Vec<String> = entity::prelude::FlightCrew::find()
        .filter(entity::flight_crew::Column::FlightNum.eq(flight.flight_num))
        .all(db)
        .await?
        .into_iter()
        .map(|a| a.staff_id)
        .collect();
    crew.sort();
    let mut expected = vec![pilot_staff.id, attendant.id];
    expected.sort();
    assert_eq!(crew, expected);

    Ok(())
}

/// Tests assigning the same staff member to the same flight twice.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_airplane, staff, _pilot, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;

    let repo = FlightCrewRepository::new(db);
    let result = repo.create(&staff.id, flight.flight_num).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
