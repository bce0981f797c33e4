//! Create `prescription_table`.
//!
//! Doctor/patient names are denormalized copies; the id columns carry no
//! foreign keys. Mandatory fields are enforced only by NOT NULL here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrescriptionTable::Table)
                    .if_not_exists()
                    .col(pk_auto(PrescriptionTable::PrescriptionId))
                    .col(integer(PrescriptionTable::DoctorId).not_null())
                    .col(string_len(PrescriptionTable::DoctorName, 100).not_null())
                    .col(integer_null(PrescriptionTable::PatientId))
                    .col(string_len(PrescriptionTable::PatientName, 100).not_null())
                    .col(integer_null(PrescriptionTable::AppointmentId))
                    .col(string_len(PrescriptionTable::Date, 20).not_null())
                    .col(text(PrescriptionTable::Medications).not_null())
                    .col(text_null(PrescriptionTable::Dosage))
                    .col(text_null(PrescriptionTable::Instructions))
                    .col(text_null(PrescriptionTable::Diagnosis))
                    .col(text_null(PrescriptionTable::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PrescriptionTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum PrescriptionTable {
    Table,
    PrescriptionId,
    DoctorId,
    DoctorName,
    PatientId,
    PatientName,
    AppointmentId,
    Date,
    Medications,
    Dosage,
    Instructions,
    Diagnosis,
    Notes,
}
