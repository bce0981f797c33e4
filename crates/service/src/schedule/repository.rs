use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::schedule::{self, Model, SchedulePayload};
use models::errors::ModelError;

use crate::errors::ServiceError;

pub(crate) const ENTITY: &str = "Schedule";

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn save(&self, payload: SchedulePayload) -> Result<Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn find_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_doctor_and_day(&self, doctor_id: i32, day_of_week: &str) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_doctor_and_availability(&self, doctor_id: i32, available: bool) -> Result<Vec<Model>, ServiceError>;
    async fn overwrite(&self, id: i32, payload: SchedulePayload) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmScheduleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmScheduleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ScheduleRepository for SeaOrmScheduleRepository {
    async fn save(&self, payload: SchedulePayload) -> Result<Model, ServiceError> {
        Ok(schedule::create(&self.db, payload).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(schedule::find_by_id(&self.db, id).await?)
    }

    async fn find_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError> {
        Ok(schedule::find_by_doctor(&self.db, doctor_id).await?)
    }

    async fn find_by_doctor_and_day(&self, doctor_id: i32, day_of_week: &str) -> Result<Vec<Model>, ServiceError> {
        Ok(schedule::find_by_doctor_and_day(&self.db, doctor_id, day_of_week).await?)
    }

    async fn find_by_doctor_and_availability(&self, doctor_id: i32, available: bool) -> Result<Vec<Model>, ServiceError> {
        Ok(schedule::find_by_doctor_and_availability(&self.db, doctor_id, available).await?)
    }

    async fn overwrite(&self, id: i32, payload: SchedulePayload) -> Result<Model, ServiceError> {
        schedule::overwrite(&self.db, id, payload).await.map_err(|e| match e {
            ModelError::NotUpdated => ServiceError::not_found(ENTITY),
            e => e.into(),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(schedule::delete(&self.db, id).await?)
    }
}

/// In-memory repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        last_id: i32,
        rows: BTreeMap<i32, Model>,
    }

    #[derive(Default)]
    pub struct InMemoryScheduleRepository {
        table: Mutex<Table>,
    }

    impl InMemoryScheduleRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("schedule table lock poisoned".into()))
        }

        fn filtered(&self, pred: impl Fn(&Model) -> bool) -> Result<Vec<Model>, ServiceError> {
            Ok(self.lock()?.rows.values().filter(|m| pred(m)).cloned().collect())
        }
    }

    // Every schedule column is NOT NULL.
    fn row(id: i32, p: SchedulePayload) -> Result<Model, ServiceError> {
        let missing = [
            ("doctor_id", p.doctor_id.is_none()),
            ("day_of_week", p.day_of_week.is_none()),
            ("start_time", p.start_time.is_none()),
            ("end_time", p.end_time.is_none()),
            ("is_available", p.is_available.is_none()),
            ("max_appointments", p.max_appointments.is_none()),
        ]
        .into_iter()
        .find(|(_, absent)| *absent);
        if let Some((col, _)) = missing {
            return Err(ServiceError::Db(format!("NOT NULL constraint failed: schedule_table.{}", col)));
        }
        Ok(Model {
            id,
            doctor_id: p.doctor_id,
            day_of_week: p.day_of_week,
            start_time: p.start_time,
            end_time: p.end_time,
            is_available: p.is_available,
            max_appointments: p.max_appointments,
        })
    }

    #[async_trait]
    impl ScheduleRepository for InMemoryScheduleRepository {
        async fn save(&self, payload: SchedulePayload) -> Result<Model, ServiceError> {
            let mut table = self.lock()?;
            let model = row(table.last_id + 1, payload)?;
            table.last_id = model.id;
            table.rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError> {
            self.filtered(|m| m.doctor_id == Some(doctor_id))
        }

        async fn find_by_doctor_and_day(&self, doctor_id: i32, day_of_week: &str) -> Result<Vec<Model>, ServiceError> {
            self.filtered(|m| m.doctor_id == Some(doctor_id) && m.day_of_week.as_deref() == Some(day_of_week))
        }

        async fn find_by_doctor_and_availability(&self, doctor_id: i32, available: bool) -> Result<Vec<Model>, ServiceError> {
            self.filtered(|m| m.doctor_id == Some(doctor_id) && m.is_available == Some(available))
        }

        async fn overwrite(&self, id: i32, payload: SchedulePayload) -> Result<Model, ServiceError> {
            let mut table = self.lock()?;
            if !table.rows.contains_key(&id) {
                return Err(ServiceError::not_found(ENTITY));
            }
            let model = row(id, payload)?;
            table.rows.insert(id, model.clone());
            Ok(model)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }
}
