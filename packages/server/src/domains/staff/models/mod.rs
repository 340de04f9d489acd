//! Staff domain models

pub mod employee;

pub use employee::{compose_display_name, Employee};
