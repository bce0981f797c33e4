//! Create `schedule_table`.
//!
//! Day and times are free-text labels; nothing here prevents overlapping rows
//! for the same doctor.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleTable::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduleTable::ScheduleId))
                    .col(integer(ScheduleTable::DoctorId).not_null())
                    .col(string_len(ScheduleTable::DayOfWeek, 20).not_null())
                    .col(string_len(ScheduleTable::StartTime, 20).not_null())
                    .col(string_len(ScheduleTable::EndTime, 20).not_null())
                    .col(boolean(ScheduleTable::IsAvailable).not_null())
                    .col(integer(ScheduleTable::MaxAppointments).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ScheduleTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum ScheduleTable {
    Table,
    ScheduleId,
    DoctorId,
    DayOfWeek,
    StartTime,
    EndTime,
    IsAvailable,
    MaxAppointments,
}
