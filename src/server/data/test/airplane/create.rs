use super::*;

fn params(serial_number: i64) -> CreateAirplaneParams {
    CreateAirplaneParams {
        serial_number,
        manufacturer: "Airbus".to_string(),
        model_number: "A320".to_string(),
        type_rating: TypeRating::new("C"),
    }
}

/// Tests inserting a new airplane.
///
/// Verifies that every field is persisted under the given serial number.
///
/// Expected: Ok with airplane stored
#[tokio::test]
async fn creates_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);
    let airplane = repo.create(params(320)).await?;

    assert_eq!(airplane.serial_number, 320);
    assert_eq!(airplane.type_rating, TypeRating::new("C"));

    let stored = entity::prelude::Airplane::find_by_id(320).one(db).await?;
    let stored = stored.unwrap();
    assert_eq!(stored.manufacturer, "Airbus");
    assert_eq!(stored.model_number, "A320");
    assert_eq!(stored.type_rating, "C");

    Ok(())
}

/// Tests inserting an airplane whose serial number is taken.
///
/// Verifies that the store reports a unique violation and the existing row keeps its
/// original values.
///
/// Expected: Err with unique violation, original row unchanged
#[tokio::test]
async fn rejects_duplicate_serial_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::airplane::AirplaneFactory::new(db)
        .serial_number(747)
        .manufacturer("Boeing")
        .build()
        .await?;

    let repo = AirplaneRepository::new(db);
    let result = repo.create(params(747)).await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));

    let stored = entity::prelude::Airplane::find_by_id(747).one(db).await?;
    assert_eq!(stored, Some(existing));

    Ok(())
}
