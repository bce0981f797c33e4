//! Persistence layer: SeaORM entities for prescriptions and doctor schedules,
//! their JSON payload shapes, and entity-level data access functions.

pub mod errors;
pub mod db;
pub mod prescription;
pub mod schedule;

#[cfg(test)]
mod tests;
