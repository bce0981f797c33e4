use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, NotSet, QueryOrder, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const DEFAULT_MAX_APPOINTMENTS: i32 = 10;

/// A weekly availability slot for one doctor.
///
/// Day and times are free-text labels ("Monday", "09:00 AM"); they are never
/// parsed, so ordering and overlap between rows are not checked.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule_table")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "schedule_id")]
    pub id: i32,
    pub doctor_id: Option<i32>,
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_available: Option<bool>,
    pub max_appointments: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for add and update.
///
/// An omitted `isAvailable` reads as `true` and an omitted `maxAppointments`
/// as 10; an explicit `null` is kept as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub id: Option<i32>,
    pub doctor_id: Option<i32>,
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: Option<bool>,
    #[serde(default = "default_max_appointments")]
    pub max_appointments: Option<i32>,
}

fn default_available() -> Option<bool> { Some(true) }
fn default_max_appointments() -> Option<i32> { Some(DEFAULT_MAX_APPOINTMENTS) }

impl Default for SchedulePayload {
    fn default() -> Self {
        Self {
            id: None,
            doctor_id: None,
            day_of_week: None,
            start_time: None,
            end_time: None,
            is_available: default_available(),
            max_appointments: default_max_appointments(),
        }
    }
}

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl SchedulePayload {
    /// Checks applied before a schedule is created, in a fixed order so the
    /// first offending field is the one reported. Fills in availability when
    /// it was sent as null.
    pub fn validate_for_create(mut self) -> Result<Self, ModelError> {
        if self.doctor_id.is_none() {
            return Err(ModelError::validation("Doctor ID is required"));
        }
        if is_blank(&self.day_of_week) {
            return Err(ModelError::validation("Day of week is required"));
        }
        if is_blank(&self.start_time) {
            return Err(ModelError::validation("Start time is required"));
        }
        if is_blank(&self.end_time) {
            return Err(ModelError::validation("End time is required"));
        }
        if !matches!(self.max_appointments, Some(n) if n >= 1) {
            return Err(ModelError::validation("Max appointments must be at least 1"));
        }
        if self.is_available.is_none() {
            self.is_available = Some(true);
        }
        Ok(self)
    }

    fn into_active_model(self, id: ActiveValue<i32>) -> ActiveModel {
        ActiveModel {
            id,
            doctor_id: Set(self.doctor_id),
            day_of_week: Set(self.day_of_week),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
            is_available: Set(self.is_available),
            max_appointments: Set(self.max_appointments),
        }
    }
}

impl From<Model> for SchedulePayload {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            doctor_id: m.doctor_id,
            day_of_week: m.day_of_week,
            start_time: m.start_time,
            end_time: m.end_time,
            is_available: m.is_available,
            max_appointments: m.max_appointments,
        }
    }
}

pub async fn create(db: &DatabaseConnection, payload: SchedulePayload) -> Result<Model, ModelError> {
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

/// Exact, case-sensitive match on the day label.
pub async fn find_by_doctor_and_day(db: &DatabaseConnection, doctor_id: i32, day_of_week: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DoctorId.eq(doctor_id))
        .filter(Column::DayOfWeek.eq(day_of_week))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_doctor_and_availability(db: &DatabaseConnection, doctor_id: i32, available: bool) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DoctorId.eq(doctor_id))
        .filter(Column::IsAvailable.eq(available))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn overwrite(db: &DatabaseConnection, id: i32, payload: SchedulePayload) -> Result<Model, ModelError> {
    let am = payload.into_active_model(Unchanged(id));
    Ok(am.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
