//! Inventory store seam
//!
//! The board never talks to Postgres directly; it goes through this trait.
//! That keeps the load, merge, and transition logic testable with an
//! in-memory double and pins down exactly which reads and writes the board
//! performs.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{EmployeeId, HallId, RoomId};
use crate::domains::inventory::{Hall, HallBoardRow, Room, RoomBoardRow};
use crate::domains::staff::models::Employee;

use super::board::Attendant;
use super::status::HousekeepingStatus;

/// A single-field update to one unit.
///
/// Transitions only ever change one column at a time; modeling the patch as
/// a sum type makes writing both fields in one call unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPatch {
    /// Set the housekeeping status column.
    Status(HousekeepingStatus),
    /// Set or clear (`None`) the attendant assignment.
    Attendant(Option<EmployeeId>),
}

/// Persistence seam for everything the status board reads and writes.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All rooms in board projection form, ordered by room number.
    async fn list_rooms(&self) -> Result<Vec<RoomBoardRow>>;

    /// All halls in board projection form, ordered by hall number.
    async fn list_halls(&self) -> Result<Vec<HallBoardRow>>;

    /// All employees available for assignment, ordered by name.
    async fn list_attendants(&self) -> Result<Vec<Attendant>>;

    /// Apply a patch to one room. Returns the number of rows affected.
    async fn update_room(&self, id: RoomId, patch: UnitPatch) -> Result<u64>;

    /// Apply a patch to one hall. Returns the number of rows affected.
    async fn update_hall(&self, id: HallId, patch: UnitPatch) -> Result<u64>;
}

/// Postgres-backed store used by the running server.
#[derive(Clone)]
pub struct PgInventoryStore {
    pool: PgPool,
}

impl PgInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn list_rooms(&self) -> Result<Vec<RoomBoardRow>> {
        RoomBoardRow::fetch_all(&self.pool).await
    }

    async fn list_halls(&self) -> Result<Vec<HallBoardRow>> {
        HallBoardRow::fetch_all(&self.pool).await
    }

    async fn list_attendants(&self) -> Result<Vec<Attendant>> {
        let employees = Employee::find_all(&self.pool).await?;
        Ok(employees.into_iter().map(Attendant::from).collect())
    }

    async fn update_room(&self, id: RoomId, patch: UnitPatch) -> Result<u64> {
        match patch {
            UnitPatch::Status(status) => {
                Room::set_housekeeping_status(id, status.as_str(), &self.pool).await
            }
            UnitPatch::Attendant(attendant) => Room::set_attendant(id, attendant, &self.pool).await,
        }
    }

    async fn update_hall(&self, id: HallId, patch: UnitPatch) -> Result<u64> {
        match patch {
            UnitPatch::Status(status) => {
                Hall::set_housekeeping_status(id, status.as_str(), &self.pool).await
            }
            UnitPatch::Attendant(attendant) => Hall::set_attendant(id, attendant, &self.pool).await,
        }
    }
}
