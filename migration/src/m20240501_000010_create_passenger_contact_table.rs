use sea_orm_migration::{prelude::*, schema::*};

use super::m20240501_000009_create_passenger_table::Passenger;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PassengerContact::Table)
                    .if_not_exists()
                    .col(string(PassengerContact::PassengerId).primary_key())
                    .col(string(PassengerContact::HomeAddress))
                    .col(string(PassengerContact::WorkAddress))
                    .col(string(PassengerContact::HomePhone))
                    .col(string(PassengerContact::WorkPhone))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_contact_passenger_id")
                            .from(PassengerContact::Table, PassengerContact::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PassengerContact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PassengerContact {
    Table,
    PassengerId,
    HomeAddress,
    WorkAddress,
    HomePhone,
    WorkPhone,
}
