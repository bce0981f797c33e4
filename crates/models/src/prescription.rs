use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, NotSet, QueryOrder, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A prescription row. Doctor and patient names are denormalized copies of
/// data owned elsewhere and are stored as opaque text.
///
/// `doctor_id`, `doctor_name`, `patient_name`, `date` and `medications` are
/// NOT NULL in the table but optional here: nothing checks them before the
/// write, so a missing value surfaces as a database error.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prescription_table")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "prescription_id")]
    pub id: i32,
    pub doctor_id: Option<i32>,
    pub doctor_name: Option<String>,
    pub patient_id: Option<i32>,
    pub patient_name: Option<String>,
    pub appointment_id: Option<i32>,
    pub date: Option<String>,
    /// Comma separated or JSON encoded list, kept as entered.
    #[sea_orm(column_type = "Text")]
    pub medications: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub dosage: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub instructions: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub diagnosis: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for add and update. `id` is ignored on add and required on update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPayload {
    pub id: Option<i32>,
    pub doctor_id: Option<i32>,
    pub doctor_name: Option<String>,
    pub patient_id: Option<i32>,
    pub patient_name: Option<String>,
    pub appointment_id: Option<i32>,
    pub date: Option<String>,
    pub medications: Option<String>,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub diagnosis: Option<String>,
    pub notes: Option<String>,
}

impl PrescriptionPayload {
    /// Every column is written, so an update replaces the whole row.
    fn into_active_model(self, id: ActiveValue<i32>) -> ActiveModel {
        ActiveModel {
            id,
            doctor_id: Set(self.doctor_id),
            doctor_name: Set(self.doctor_name),
            patient_id: Set(self.patient_id),
            patient_name: Set(self.patient_name),
            appointment_id: Set(self.appointment_id),
            date: Set(self.date),
            medications: Set(self.medications),
            dosage: Set(self.dosage),
            instructions: Set(self.instructions),
            diagnosis: Set(self.diagnosis),
            notes: Set(self.notes),
        }
    }
}

impl From<Model> for PrescriptionPayload {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            doctor_id: m.doctor_id,
            doctor_name: m.doctor_name,
            patient_id: m.patient_id,
            patient_name: m.patient_name,
            appointment_id: m.appointment_id,
            date: m.date,
            medications: m.medications,
            dosage: m.dosage,
            instructions: m.instructions,
            diagnosis: m.diagnosis,
            notes: m.notes,
        }
    }
}

/// Insert a new row with a generated id.
pub async fn create(db: &DatabaseConnection, payload: PrescriptionPayload) -> Result<Model, ModelError> {
    let am = payload.into_active_model(NotSet);
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_doctor(db: &DatabaseConnection, doctor_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DoctorId.eq(doctor_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_patient(db: &DatabaseConnection, patient_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::PatientId.eq(patient_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_appointment(db: &DatabaseConnection, appointment_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::AppointmentId.eq(appointment_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Replace every stored field of row `id` with the payload's values.
pub async fn overwrite(db: &DatabaseConnection, id: i32, payload: PrescriptionPayload) -> Result<Model, ModelError> {
    let am = payload.into_active_model(Unchanged(id));
    Ok(am.update(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
