// Hotel Back-Office - API Core
//
// This crate provides the backend API for the property back-office, centered on
// the housekeeping status board: a unified view of rooms and halls grouped by
// floor, with per-unit status transitions and attendant assignment.
//
// Architecture follows domain-driven design; persistence goes through the
// InventoryStore trait so the board logic stays testable without a database.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
