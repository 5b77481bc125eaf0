use super::*;

/// Tests inserting a staff member with contact details.
///
/// Verifies that the staff row and exactly one contact row referencing it are written.
///
/// Expected: Ok with staff and contact rows stored
#[tokio::test]
async fn creates_staff_with_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    let staff = repo.create("jsmith".to_string(), staff_params()).await?;

    assert_eq!(staff.id, "jsmith");
    assert_eq!(staff.salary, 75000.0);

    let contacts = entity::prelude::Contact::find()
        .filter(entity::contact::Column::StaffId.eq("jsmith"))
        .all(db)
        .await?;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].home_address, "789 Pine St");
    assert_eq!(contacts[0].work_phone, "555-4321");

    Ok(())
}

/// Tests inserting a staff member whose ID is taken.
///
/// Verifies that no second contact row is written for the existing ID.
///
/// Expected: Err, contact count unchanged
#[tokio::test]
async fn fails_for_taken_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::staff::StaffFactory::new(db).id("jsmith").build().await?;

    let repo = StaffRepository::new(db);
    let result = repo.create("jsmith".to_string(), staff_params()).await;

    assert!(result.is_err());
    let contact_count = entity::prelude::Contact::find().count(db).await?;
    assert_eq!(contact_count, 0);

    Ok(())
}
