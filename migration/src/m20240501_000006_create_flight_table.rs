use sea_orm_migration::{prelude::*, schema::*};

use super::m20240501_000001_create_airplane_table::Airplane;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(big_integer(Flight::FlightNum).primary_key())
                    .col(big_integer(Flight::SerialNumber))
                    .col(string(Flight::Origin))
                    .col(string(Flight::Destination))
                    .col(string(Flight::ArrivalTime))
                    .col(string(Flight::DepartureTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_serial_number")
                            .from(Flight::Table, Flight::SerialNumber)
                            .to(Airplane::Table, Airplane::SerialNumber)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    FlightNum,
    SerialNumber,
    Origin,
    Destination,
    ArrivalTime,
    DepartureTime,
}
