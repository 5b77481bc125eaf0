use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airplane::Table)
                    .if_not_exists()
                    .col(big_integer(Airplane::SerialNumber).primary_key())
                    .col(string(Airplane::Manufacturer))
                    .col(string(Airplane::ModelNumber))
                    .col(string(Airplane::TypeRating))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airplane::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airplane {
    Table,
    SerialNumber,
    Manufacturer,
    ModelNumber,
    TypeRating,
}
