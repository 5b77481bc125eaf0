use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000003_create_staff_table::Staff, m20240501_000006_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightCrew::Table)
                    .if_not_exists()
                    .col(string(FlightCrew::StaffId))
                    .col(big_integer(FlightCrew::FlightNum))
                    .primary_key(
                        Index::create()
                            .col(FlightCrew::StaffId)
                            .col(FlightCrew::FlightNum),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_staff_id")
                            .from(FlightCrew::Table, FlightCrew::StaffId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_flight_num")
                            .from(FlightCrew::Table, FlightCrew::FlightNum)
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
            .drop_table(Table::drop().table(FlightCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightCrew {
    Table,
    StaffId,
    FlightNum,
}
