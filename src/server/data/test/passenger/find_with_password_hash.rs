use super::*;

/// Tests loading a passenger with the stored password hash.
///
/// Expected: Ok(Some) with the argon2 PHC string
#[tokio::test]
async fn returns_passenger_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::passenger::PassengerFactory::new(db)
        .id("ksmith")
        .build()
        .await?;

    let repo = PassengerRepository::new(db);
    let (found, hash) = repo.find_with_password_hash("ksmith").await?.unwrap();

    assert_eq!(found.id, "ksmith");
    assert_eq!(hash, passenger.password_hash);
    assert!(hash.starts_with("$argon2"));

    Ok(())
}

/// Tests loading an unknown passenger.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PassengerRepository::new(db);

    assert!(repo.find_with_password_hash("ghost").await?.is_none());

    Ok(())
}
