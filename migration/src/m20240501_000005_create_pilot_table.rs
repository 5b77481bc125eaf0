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
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(string(Pilot::StaffId).primary_key())
                    .col(string(Pilot::TypeRating))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_staff_id")
                            .from(Pilot::Table, Pilot::StaffId)
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
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pilot {
    Table,
    StaffId,
    TypeRating,
}
