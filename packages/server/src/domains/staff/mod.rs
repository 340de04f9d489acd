//! Staff domain - employees of the property
//!
//! The housekeeping board only needs staff as assignment targets: every
//! employee can be picked as the attendant responsible for a unit.

pub mod models;

// Re-export models
pub use models::Employee;
