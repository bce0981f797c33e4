use std::sync::Arc;

use models::schedule::{Model, SchedulePayload};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::schedule::repository::{ScheduleRepository, ENTITY};

pub const DELETED_MESSAGE: &str = "Schedule deleted successfully";

/// Application service for doctor schedules.
///
/// Create-time field checks live in [`SchedulePayload::validate_for_create`]
/// and are applied by the HTTP layer before [`ScheduleService::add`].
/// Overlapping or duplicate slots are accepted.
pub struct ScheduleService<R: ScheduleRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ScheduleRepository + ?Sized> ScheduleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, payload), fields(doctor_id = ?payload.doctor_id, day = ?payload.day_of_week))]
    pub async fn add(&self, payload: SchedulePayload) -> Result<Model, ServiceError> {
        let saved = self.repo.save(payload).await?;
        info!(id = saved.id, "schedule_added");
        Ok(saved)
    }

    pub async fn list_by_doctor(&self, doctor_id: i32) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_doctor(doctor_id).await
    }

    pub async fn list_by_doctor_and_day(&self, doctor_id: i32, day_of_week: &str) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_doctor_and_day(doctor_id, day_of_week).await
    }

    pub async fn list_by_doctor_and_availability(&self, doctor_id: i32, available: bool) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_by_doctor_and_availability(doctor_id, available).await
    }

    #[instrument(skip(self, payload), fields(id = ?payload.id))]
    pub async fn update(&self, payload: SchedulePayload) -> Result<Model, ServiceError> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::Validation("Schedule ID is required".into()))?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        let updated = self.repo.overwrite(id, payload).await?;
        info!(id, "schedule_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<String, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        self.repo.delete(id).await?;
        info!(id, "schedule_deleted");
        Ok(DELETED_MESSAGE.to_string())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::repository::mock::InMemoryScheduleRepository;

    fn svc() -> ScheduleService<InMemoryScheduleRepository> {
        ScheduleService::new(Arc::new(InMemoryScheduleRepository::default()))
    }

    fn monday(doctor_id: i32, start: &str, end: &str) -> SchedulePayload {
        SchedulePayload {
            doctor_id: Some(doctor_id),
            day_of_week: Some("Monday".into()),
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            ..SchedulePayload::default()
        }
    }

    #[tokio::test]
    async fn overlapping_schedules_are_accepted() -> Result<(), anyhow::Error> {
        let s = svc();
        let a = s.add(monday(5, "09:00 AM", "05:00 PM").validate_for_create()?).await?;
        let b = s.add(monday(5, "10:00 AM", "11:00 AM").validate_for_create()?).await?;
        assert_eq!(a.is_available, Some(true));
        assert_eq!(s.list_by_doctor(5).await?, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn day_and_availability_lookups() -> Result<(), anyhow::Error> {
        let s = svc();
        let open = s.add(monday(5, "09:00 AM", "12:00 PM")).await?;
        let closed = s
            .add(SchedulePayload { day_of_week: Some("Friday".into()), is_available: Some(false), ..monday(5, "09:00 AM", "12:00 PM") })
            .await?;

        assert_eq!(s.list_by_doctor_and_day(5, "Monday").await?, vec![open.clone()]);
        assert_eq!(s.list_by_doctor_and_availability(5, true).await?, vec![open]);
        assert_eq!(s.list_by_doctor_and_availability(5, false).await?, vec![closed]);
        Ok(())
    }

    #[tokio::test]
    async fn update_round_trip_and_not_found() -> Result<(), anyhow::Error> {
        let s = svc();
        let created = s.add(monday(5, "09:00 AM", "05:00 PM")).await?;

        let updated = s
            .update(SchedulePayload { id: Some(created.id), max_appointments: Some(3), ..monday(5, "08:00 AM", "12:00 PM") })
            .await?;
        assert_eq!(s.get(created.id).await?, Some(updated.clone()));
        assert_eq!(updated.start_time.as_deref(), Some("08:00 AM"));
        assert_eq!(updated.max_appointments, Some(3));

        let err = s.update(SchedulePayload { id: Some(999), ..monday(5, "a", "b") }).await.unwrap_err();
        assert_eq!(err.to_string(), "Schedule not found");

        let err = s.update(monday(5, "a", "b")).await.unwrap_err();
        assert!(err.is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_lookup_is_absent() -> Result<(), anyhow::Error> {
        let s = svc();
        let created = s.add(monday(5, "09:00 AM", "05:00 PM")).await?;
        assert_eq!(s.delete(created.id).await?, "Schedule deleted successfully");
        assert!(s.get(created.id).await?.is_none());
        assert!(matches!(s.delete(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
