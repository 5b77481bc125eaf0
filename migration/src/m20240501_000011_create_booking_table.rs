use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000006_create_flight_table::Flight,
    m20240501_000009_create_passenger_table::Passenger,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(string(Booking::PassengerId))
                    .col(big_integer(Booking::FlightNum))
                    .primary_key(
                        Index::create()
                            .col(Booking::PassengerId)
                            .col(Booking::FlightNum),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_passenger_id")
                            .from(Booking::Table, Booking::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_flight_num")
                            .from(Booking::Table, Booking::FlightNum)
                            .to(Flight::Table, Flight::FlightNum)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    PassengerId,
    FlightNum,
}
