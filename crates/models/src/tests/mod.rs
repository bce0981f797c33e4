/// In-memory SQLite connection with the real migrator applied
pub mod support;

/// Prescription data access against a migrated database
pub mod prescription_tests;
