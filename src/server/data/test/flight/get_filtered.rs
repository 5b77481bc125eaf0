use super::*;

/// Tests listing flights with and without filters.
///
/// Verifies exact matching on origin and destination, and ordering by flight number.
///
/// Expected: Ok with only the matching flights in ascending order
#[tokio::test]
async fn filters_by_origin_and_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let serial = airplane.serial_number;
    for (flight_num, origin, destination) in [
        (30, "London", "Leeds"),
        (10, "London", "Glasgow"),
        (20, "Leeds", "London"),
    ] {
        factory::flight::FlightFactory::new(db, serial)
            .flight_num(flight_num)
            .origin(origin)
            .destination(destination)
            .build()
            .await?;
    }

    let repo = FlightRepository::new(db);

    let all = repo.get_filtered(&FlightFilter::default()).await?;
    let numbers: Vec<i64> = all.iter().map(|f| f.flight_num).collect();
    assert_eq!(numbers, vec![10, 20, 30]);

    let from_london = repo
        .get_filtered(&FlightFilter {
            origin: Some("London".to_string()),
            destination: None,
        })
        .await?;
    let numbers: Vec<i64> = from_london.iter().map(|f| f.flight_num).collect();
    assert_eq!(numbers, vec![10, 30]);

    let london_to_leeds = repo
        .get_filtered(&FlightFilter {
            origin: Some("London".to_string()),
            destination: Some("Leeds".to_string()),
        })
        .await?;
    assert_eq!(london_to_leeds.len(), 1);
    assert_eq!(london_to_leeds[0].flight_num, 30);

    Ok(())
}

/// Tests filtering with a value that matches nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    factory::create_flight(db, airplane.serial_number).await?;

    let repo = FlightRepository::new(db);
    let flights = repo
        .get_filtered(&FlightFilter {
            origin: Some("london".to_string()),
            destination: None,
        })
        .await?;

    assert!(flights.is_empty());

    Ok(())
}
