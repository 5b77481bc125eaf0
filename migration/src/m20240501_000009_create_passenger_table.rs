use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(string(Passenger::Id).primary_key())
                    .col(string(Passenger::FirstName))
                    .col(string(Passenger::Surname))
                    .col(string(Passenger::PasswordHash))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    FirstName,
    Surname,
    PasswordHash,
}
