use super::*;

/// Tests searching flights by a substring of the flight number.
///
/// Expected: Ok with every flight whose number contains the pattern
#[tokio::test]
async fn matches_substring_of_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    for flight_num in [12, 120, 312, 45] {
        factory::flight::FlightFactory::new(db, airplane.serial_number)
            .flight_num(flight_num)
            .build()
            .await?;
    }

    let repo = FlightRepository::new(db);
    let flights = repo.search_by_number("12").await?;

    let numbers: Vec<i64> = flights.iter().map(|f| f.flight_num).collect();
    assert_eq!(numbers, vec![12, 120, 312]);

    Ok(())
}

/// Tests searching with an empty pattern.
///
/// Expected: Ok with every flight
#[tokio::test]
async fn empty_pattern_lists_all_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    factory::create_flight(db, airplane.serial_number).await?;
    factory::create_flight(db, airplane.serial_number).await?;

    let repo = FlightRepository::new(db);

    assert_eq!(repo.search_by_number("").await?.len(), 2);
    assert!(repo.search_by_number("no-such-number").await?.is_empty());

    Ok(())
}
