use super::*;

/// Tests recording a type rating for a staff member.
///
/// Expected: Ok with pilot row readable by staff ID
#[tokio::test]
async fn creates_pilot_for_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .with_table(entity::prelude::Pilot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let repo = PilotRepository::new(db);
    let pilot = repo
        .create(CreatePilotParams {
            staff_id: staff.id.clone(),
            type_rating: TypeRating::new("D"),
        })
        .await?;

    assert_eq!(pilot.staff_id, staff.id);

    let found = repo.find_by_staff_id(&staff.id).await?.unwrap();
    assert_eq!(found.type_rating, TypeRating::new("D"));

    Ok(())
}

/// Tests recording a second rating for the same staff member.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_second_rating_for_same_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .with_table(entity::prelude::Pilot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;
    factory::create_pilot(db, &staff.id).await?;

    let repo = PilotRepository::new(db);
    let result = repo
        .create(CreatePilotParams {
            staff_id: staff.id.clone(),
            type_rating: TypeRating::new("B"),
        })
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests recording a rating for a staff ID that does not exist.
///
/// Verifies that the foreign key on the pilot table rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .with_table(entity::prelude::Pilot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let result = repo
        .create(CreatePilotParams {
            staff_id: "ghost".to_string(),
            type_rating: TypeRating::new("A"),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.find_by_staff_id("ghost").await?.is_none());

    Ok(())
}
