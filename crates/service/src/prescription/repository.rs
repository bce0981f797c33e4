use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::prescription::{self, Model, PrescriptionPayload};
use models::errors::ModelError;

use crate::errors::ServiceError;

pub(crate) const ENTITY: &str = "Prescription";

/// Persistence access for prescriptions.
#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    /// Insert with a generated id; any id in the payload is ignored.
    async fn save(&self, payload: PrescriptionPayload) -> Result<Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn find_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_patient(&self, patient_id: i32) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_appointment(&self, appointment_id: i32) -> Result<Vec<Model>, ServiceError>;
    /// Replace all fields of an existing row.
    async fn overwrite(&self, id: i32, payload: PrescriptionPayload) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPrescriptionRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPrescriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PrescriptionRepository for SeaOrmPrescriptionRepository {
    async fn save(&self, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
        Ok(prescription::create(&self.db, payload).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(prescription::find_by_id(&self.db, id).await?)
    }

    async fn find_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError> {
        Ok(prescription::find_by_doctor(&self.db, doctor_id).await?)
    }

    async fn find_by_patient(&self, patient_id: i32) -> Result<Vec<Model>, ServiceError> {
        Ok(prescription::find_by_patient(&self.db, patient_id).await?)
    }

    async fn find_by_appointment(&self, appointment_id: i32) -> Result<Vec<Model>, ServiceError> {
        Ok(prescription::find_by_appointment(&self.db, appointment_id).await?)
    }

    async fn overwrite(&self, id: i32, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
        prescription::overwrite(&self.db, id, payload).await.map_err(|e| match e {
            ModelError::NotUpdated => ServiceError::not_found(ENTITY),
            e => e.into(),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(prescription::delete(&self.db, id).await?)
    }
}

/// In-memory repository for tests and doc examples. Mirrors the table's NOT
/// NULL columns so write failures behave like the database.
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
    pub struct InMemoryPrescriptionRepository {
        table: Mutex<Table>,
    }

    impl InMemoryPrescriptionRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("prescription table lock poisoned".into()))
        }

        fn filtered(&self, pred: impl Fn(&Model) -> bool) -> Result<Vec<Model>, ServiceError> {
            Ok(self.lock()?.rows.values().filter(|m| pred(m)).cloned().collect())
        }
    }

    fn row(id: i32, p: PrescriptionPayload) -> Result<Model, ServiceError> {
        let missing = [
            ("doctor_id", p.doctor_id.is_none()),
            ("doctor_name", p.doctor_name.is_none()),
            ("patient_name", p.patient_name.is_none()),
            ("date", p.date.is_none()),
            ("medications", p.medications.is_none()),
        ]
        .into_iter()
        .find(|(_, absent)| *absent);
        if let Some((col, _)) = missing {
            return Err(ServiceError::Db(format!("NOT NULL constraint failed: prescription_table.{}", col)));
        }
        Ok(Model {
            id,
            doctor_id: p.doctor_id,
            doctor_name: p.doctor_name,
            patient_id: p.patient_id,
            patient_name: p.patient_name,
            appointment_id: p.appointment_id,
            date: p.date,
            medications: p.medications,
            dosage: p.dosage,
            instructions: p.instructions,
            diagnosis: p.diagnosis,
            notes: p.notes,
        })
    }

    #[async_trait]
    impl PrescriptionRepository for InMemoryPrescriptionRepository {
        async fn save(&self, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
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

        async fn find_by_patient(&self, patient_id: i32) -> Result<Vec<Model>, ServiceError> {
            self.filtered(|m| m.patient_id == Some(patient_id))
        }

        async fn find_by_appointment(&self, appointment_id: i32) -> Result<Vec<Model>, ServiceError> {
            self.filtered(|m| m.appointment_id == Some(appointment_id))
        }

        async fn overwrite(&self, id: i32, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
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

#[cfg(test)]
mod tests {
    use super::mock::InMemoryPrescriptionRepository;
    use super::*;
    use crate::test_support::get_db;

    fn payload(doctor_id: i32, patient: &str) -> PrescriptionPayload {
        PrescriptionPayload {
            doctor_id: Some(doctor_id),
            doctor_name: Some("Dr. House".into()),
            patient_id: Some(1),
            patient_name: Some(patient.into()),
            date: Some("2024-05-02".into()),
            medications: Some("Vicodin".into()),
            ..PrescriptionPayload::default()
        }
    }

    async fn exercise(repo: &dyn PrescriptionRepository) -> Result<(), anyhow::Error> {
        let a = repo.save(payload(3, "Alice")).await?;
        let b = repo.save(payload(4, "Bob")).await?;
        assert_ne!(a.id, b.id);

        let by_doctor = repo.find_by_doctor(3).await?;
        assert_eq!(by_doctor, vec![a.clone()]);

        let replaced = repo.overwrite(a.id, PrescriptionPayload { notes: Some("refill".into()), ..payload(3, "Alice") }).await?;
        assert_eq!(replaced.notes.as_deref(), Some("refill"));
        assert_eq!(repo.find_by_id(a.id).await?, Some(replaced));

        assert!(repo.delete(b.id).await?);
        assert!(!repo.delete(b.id).await?);
        assert!(repo.find_by_id(b.id).await?.is_none());

        let gone = repo.overwrite(b.id, payload(4, "Bob")).await.unwrap_err();
        assert!(matches!(gone, ServiceError::NotFound(ref m) if m == "Prescription not found"));

        assert!(repo.save(PrescriptionPayload { patient_name: None, ..payload(3, "x") }).await.is_err());
        assert_eq!(repo.find_by_doctor(3).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_contract() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        exercise(&SeaOrmPrescriptionRepository::new(db)).await
    }

    #[tokio::test]
    async fn in_memory_repository_contract() -> Result<(), anyhow::Error> {
        exercise(&InMemoryPrescriptionRepository::default()).await
    }
}
