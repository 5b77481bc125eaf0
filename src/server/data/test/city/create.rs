use super::*;

/// Tests inserting a city without an explicit ID.
///
/// Verifies that the database assigns the next free ID.
///
/// Expected: Ok with a generated ID greater than the existing one
#[tokio::test]
async fn assigns_id_when_omitted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InterCity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::inter_city::CityFactory::new(db).id(7).build().await?;

    let repo = CityRepository::new(db);
    let city = repo
        .create(CreateCityParams {
            id: None,
            name: "Leeds".to_string(),
            country: "UK".to_string(),
        })
        .await?;

    assert!(city.id > existing.id);
    assert_eq!(city.name, "Leeds");

    Ok(())
}

/// Tests inserting a city with an explicit ID.
///
/// Expected: Ok with the requested ID stored
#[tokio::test]
async fn keeps_explicit_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InterCity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo
        .create(CreateCityParams {
            id: Some(42),
            name: "Glasgow".to_string(),
            country: "UK".to_string(),
        })
        .await?;

    assert_eq!(city.id, 42);
    let stored = entity::prelude::InterCity::find_by_id(42).one(db).await?;
    assert_eq!(stored.unwrap().name, "Glasgow");
    assert!(repo.exists(42).await?);

    Ok(())
}

/// Tests inserting a city with an ID already in use.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InterCity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inter_city::CityFactory::new(db).id(3).build().await?;

    let repo = CityRepository::new(db);
    let result = repo
        .create(CreateCityParams {
            id: Some(3),
            name: "Cardiff".to_string(),
            country: "UK".to_string(),
        })
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
