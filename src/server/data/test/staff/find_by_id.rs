use super::*;

/// Tests looking up staff members by ID.
///
/// Expected: Ok(Some) for an existing ID, Ok(None) otherwise
#[tokio::test]
async fn finds_staff_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let repo = StaffRepository::new(db);
    let found = repo.find_by_id(&staff.id).await?;

    assert_eq!(found.map(|s| s.surname), Some(staff.surname));
    assert!(repo.exists(&staff.id).await?);
    assert!(!repo.exists("nobody").await?);

    Ok(())
}
