use super::*;

/// Tests looking up an existing airplane.
///
/// Expected: Ok(Some) with the airplane's fields
#[tokio::test]
async fn finds_existing_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;

    let repo = AirplaneRepository::new(db);
    let found = repo.find_by_serial_number(airplane.serial_number).await?;

    let found = found.unwrap();
    assert_eq!(found.serial_number, airplane.serial_number);
    assert_eq!(found.type_rating, TypeRating::new(airplane.type_rating));
    assert!(repo.exists(airplane.serial_number).await?);

    Ok(())
}

/// Tests looking up a serial number that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_serial_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);

    assert!(repo.find_by_serial_number(999_999).await?.is_none());
    assert!(!repo.exists(999_999).await?);

    Ok(())
}
