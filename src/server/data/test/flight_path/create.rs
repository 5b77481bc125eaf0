use super::*;

/// Tests adding cities to a flight's path.
///
/// Verifies that stops are listed in city ID order regardless of insert order.
///
/// Expected: Ok with both stops listed
#[tokio::test]
async fn adds_cities_to_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let glasgow = factory::inter_city::CityFactory::new(db).id(9).build().await?;
    let leeds = factory::inter_city::CityFactory::new(db).id(4).build().await?;

    let repo = FlightPathRepository::new(db);
    for city_id in [glasgow.id, leeds.id] {
        repo.create(&FlightPathStop {
            flight_num: flight.flight_num,
            city_id,
        })
        .await?;
    }

    let cities: Vec<i32> = entity::prelude::FlightPath::find()
        .filter(entity::flight_path::Column::FlightNum.eq(flight.flight_num))
        .order_by_asc(entity::flight_path::Column::CityId)
        .all(db)
        .await?
        .into_iter()
        .map(|stop| stop.city_id)
        .collect();
    assert_eq!(cities, vec![4, 9]);

    Ok(())
}

/// Tests adding the same city to a flight's path twice.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_stop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;
    let flight = factory::create_flight(db, airplane.serial_number).await?;
    let city = factory::create_city(db).await?;
    factory::create_flight_path(db, flight.flight_num, city.id).await?;

    let repo = FlightPathRepository::new(db);
    let result = repo
        .create(&FlightPathStop {
            flight_num: flight.flight_num,
            city_id: city.id,
        })
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
