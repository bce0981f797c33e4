//! Doctor schedule resource: repository abstraction and application service.

pub mod repository;
pub mod service;

pub use service::ScheduleService;
