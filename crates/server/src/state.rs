use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::prescription::repository::{mock::InMemoryPrescriptionRepository, PrescriptionRepository, SeaOrmPrescriptionRepository};
use service::prescription::PrescriptionService;
use service::schedule::repository::{mock::InMemoryScheduleRepository, ScheduleRepository, SeaOrmScheduleRepository};
use service::schedule::ScheduleService;

/// Shared handler state. Built once at startup; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub prescriptions: Arc<PrescriptionService<dyn PrescriptionRepository>>,
    pub schedules: Arc<ScheduleService<dyn ScheduleRepository>>,
}

impl AppState {
    pub fn new(prescriptions: Arc<dyn PrescriptionRepository>, schedules: Arc<dyn ScheduleRepository>) -> Self {
        Self {
            prescriptions: Arc::new(PrescriptionService::new(prescriptions)),
            schedules: Arc::new(ScheduleService::new(schedules)),
        }
    }

    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmPrescriptionRepository::new(db.clone())),
            Arc::new(SeaOrmScheduleRepository::new(db)),
        )
    }

    /// Process-local storage, for tests and demos without a database.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPrescriptionRepository::default()),
            Arc::new(InMemoryScheduleRepository::default()),
        )
    }
}
