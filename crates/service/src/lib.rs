//! Service layer providing business-oriented CRUD operations on top of models.
//! - Repository traits separate business rules from data access; each has a
//!   SeaORM-backed and an in-memory implementation.
//! - Services add the existence checks and status messages the HTTP layer relies on.

pub mod errors;
pub mod prescription;
pub mod schedule;
#[cfg(test)]
pub mod test_support;
