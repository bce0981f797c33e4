use std::sync::Arc;

use models::prescription::{Model, PrescriptionPayload};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::prescription::repository::{PrescriptionRepository, ENTITY};

pub const DELETED_MESSAGE: &str = "Prescription deleted successfully";

/// Application service for prescriptions. No field validation happens here:
/// incomplete records are rejected by storage.
pub struct PrescriptionService<R: PrescriptionRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PrescriptionRepository + ?Sized> PrescriptionService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new prescription and return it with its generated id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::prescription::{PrescriptionService, repository::mock::InMemoryPrescriptionRepository};
    /// use models::prescription::PrescriptionPayload;
    /// let svc = PrescriptionService::new(Arc::new(InMemoryPrescriptionRepository::default()));
    /// let saved = tokio_test::block_on(svc.add(PrescriptionPayload {
    ///     doctor_id: Some(7),
    ///     doctor_name: Some("Dr. Grey".into()),
    ///     patient_name: Some("Izzie".into()),
    ///     date: Some("2024-01-15".into()),
    ///     medications: Some("Aspirin".into()),
    ///     ..Default::default()
    /// })).unwrap();
    /// assert_eq!(saved.id, 1);
    /// ```
    #[instrument(skip(self, payload), fields(doctor_id = ?payload.doctor_id, patient_id = ?payload.patient_id))]
    pub async fn add(&self, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
        let saved = self.repo.save(payload).await?;
        info!(id = saved.id, "prescription_added");
        Ok(saved)
    }

    pub async fn list_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_doctor(doctor_id).await
    }

    pub async fn list_by_patient(&self, patient_id: i32) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_patient(patient_id).await
    }

    pub async fn list_by_appointment(&self, appointment_id: i32) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_appointment(appointment_id).await
    }

    /// Overwrite an existing prescription with the payload's full field set.
    #[instrument(skip(self, payload), fields(id = ?payload.id))]
    pub async fn update(&self, payload: PrescriptionPayload) -> Result<Model, ServiceError> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::Validation("Prescription ID is required".into()))?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        let updated = self.repo.overwrite(id, payload).await?;
        info!(id, "prescription_updated");
        Ok(updated)
    }

    /// Remove a prescription, returning the status message shown to clients.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<String, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        self.repo.delete(id).await?;
        info!(id, "prescription_deleted");
        Ok(DELETED_MESSAGE.to_string())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }
}
