use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_prescription::PrescriptionTable;
use crate::m20240101_000002_create_schedule::ScheduleTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Prescription lookups: by doctor, by patient, by appointment
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prescription_doctor")
                    .table(PrescriptionTable::Table)
                    .col(PrescriptionTable::DoctorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prescription_patient")
                    .table(PrescriptionTable::Table)
                    .col(PrescriptionTable::PatientId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prescription_appointment")
                    .table(PrescriptionTable::Table)
                    .col(PrescriptionTable::AppointmentId)
                    .to_owned(),
            )
            .await?;

        // Schedule: (doctor_id, day_of_week), not unique
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedule_doctor_day")
                    .table(ScheduleTable::Table)
                    .col(ScheduleTable::DoctorId)
                    .col(ScheduleTable::DayOfWeek)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_schedule_doctor_day").table(ScheduleTable::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_prescription_appointment").table(PrescriptionTable::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_prescription_patient").table(PrescriptionTable::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_prescription_doctor").table(PrescriptionTable::Table).to_owned())
            .await?;
        Ok(())
    }
}
