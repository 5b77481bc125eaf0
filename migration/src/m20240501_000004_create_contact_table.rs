use sea_orm_migration::{prelude::*, schema::*};

use super::m20240501_000003_create_staff_table::Staff;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::StaffId))
                    .col(string(Contact::HomeAddress))
                    .col(string(Contact::WorkAddress))
                    .col(string(Contact::HomePhone))
                    .col(string(Contact::WorkPhone))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_staff_id")
                            .from(Contact::Table, Contact::StaffId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    StaffId,
    HomeAddress,
    WorkAddress,
    HomePhone,
    WorkPhone,
}
