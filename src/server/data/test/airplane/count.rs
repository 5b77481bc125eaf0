use super::*;

/// Tests counting airplanes.
///
/// Expected: Ok(0) on an empty table, then the number of inserted airplanes
#[tokio::test]
async fn counts_airplanes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_airplane(db).await?;
    factory::create_airplane(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
