use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000002_create_inter_city_table::InterCity,
    m20240501_000006_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightPath::Table)
                    .if_not_exists()
                    .col(big_integer(FlightPath::FlightNum))
                    .col(integer(FlightPath::CityId))
                    .primary_key(
                        Index::create()
                            .col(FlightPath::FlightNum)
                            .col(FlightPath::CityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_path_flight_num")
                            .from(FlightPath::Table, FlightPath::FlightNum)
                            .to(Flight::Table, Flight::FlightNum)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_path_city_id")
                            .from(FlightPath::Table, FlightPath::CityId)
                            .to(InterCity::Table, InterCity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightPath::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightPath {
    Table,
    FlightNum,
    CityId,
}
