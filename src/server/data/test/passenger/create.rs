use super::*;

/// Tests registering a passenger with contact details.
///
/// Verifies that both the passenger row and the contact row are written.
///
/// Expected: Ok with passenger and contact stored
#[tokio::test]
async fn creates_passenger_and_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PassengerRepository::new(db);
    let passenger = repo
        .create(
            "mjones".to_string(),
            "Mary".to_string(),
            "Jones".to_string(),
            "stored-hash".to_string(),
            contact(),
        )
        .await?;

    assert_eq!(passenger.id, "mjones");
    assert_eq!(passenger.first_name, "Mary");

    let stored = entity::prelude::PassengerContact::find_by_id("mjones".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.home_address, "1 Dock Road");
    assert_eq!(stored.work_phone, "0222");

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_passenger(db).await?;

    let repo = PassengerRepository::new(db);
    let result = repo
        .create(
            existing.id,
            "Other".to_string(),
            "Person".to_string(),
            "stored-hash".to_string(),
            contact(),
        )
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
