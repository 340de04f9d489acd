//! Board service - concurrent loads and guarded transitions
//!
//! `BoardService` is the only way the rest of the system touches the board.
//! Loads fan out to the three store reads concurrently and merge only once
//! all of them have arrived; a failed read fails the whole load, so callers
//! either get a complete snapshot or keep the one they had. Transitions
//! write exactly one field of one unit and then reload the full board, so
//! every snapshot a caller ever sees reflects the store, not an optimistic
//! local edit.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::common::EmployeeId;

use super::board::{unify, BoardSnapshot, UnitRef};
use super::errors::BoardError;
use super::status::HousekeepingStatus;
use super::store::{InventoryStore, UnitPatch};

/// Orchestrates the status board against the inventory store.
pub struct BoardService {
    store: Arc<dyn InventoryStore>,
    store_timeout: Duration,
}

impl BoardService {
    pub fn new(store: Arc<dyn InventoryStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Load the full board: rooms, halls, and attendants fetched
    /// concurrently, merged only once all three have arrived.
    ///
    /// Each read is bounded by the store timeout and retried once. If any
    /// read still fails, the whole load fails and no partial snapshot is
    /// produced.
    pub async fn reload(&self) -> Result<BoardSnapshot, BoardError> {
        let (rooms, halls, attendants) = tokio::try_join!(
            read_with_retry("rooms", self.store_timeout, || self.store.list_rooms()),
            read_with_retry("halls", self.store_timeout, || self.store.list_halls()),
            read_with_retry("attendants", self.store_timeout, || {
                self.store.list_attendants()
            }),
        )
        .map_err(BoardError::load)?;

        let snapshot = BoardSnapshot::new(unify(rooms, halls), attendants);
        info!(
            entries = snapshot.entries.len(),
            attendants = snapshot.attendants.len(),
            "housekeeping board loaded"
        );
        Ok(snapshot)
    }

    /// Move one unit to a new status, then reload the full board.
    pub async fn change_status(
        &self,
        unit: UnitRef,
        status: HousekeepingStatus,
    ) -> Result<BoardSnapshot, BoardError> {
        info!(kind = %unit.kind(), id = unit.raw_id(), status = %status, "changing unit status");
        self.apply_patch(unit, UnitPatch::Status(status)).await?;
        self.reload().await
    }

    /// Assign an attendant to one unit (`None` clears the assignment), then
    /// reload the full board.
    pub async fn assign(
        &self,
        unit: UnitRef,
        attendant: Option<EmployeeId>,
    ) -> Result<BoardSnapshot, BoardError> {
        info!(kind = %unit.kind(), id = unit.raw_id(), attendant = ?attendant, "assigning attendant");
        self.apply_patch(unit, UnitPatch::Attendant(attendant))
            .await?;
        self.reload().await
    }

    /// Route the patch to exactly one table.
    ///
    /// Writes are bounded by the store timeout but never retried; a write
    /// that may or may not have landed must not be repeated blindly.
    async fn apply_patch(&self, unit: UnitRef, patch: UnitPatch) -> Result<(), BoardError> {
        let write = async {
            match unit {
                UnitRef::Room(id) => self.store.update_room(id, patch).await,
                UnitRef::Hall(id) => self.store.update_hall(id, patch).await,
            }
        };

        let affected = tokio::time::timeout(self.store_timeout, write)
            .await
            .map_err(|_| {
                BoardError::transition(
                    unit,
                    anyhow!("store write timed out after {:?}", self.store_timeout),
                )
            })?
            .map_err(|source| BoardError::transition(unit, source))?;

        if affected == 0 {
            return Err(BoardError::not_found(unit));
        }
        Ok(())
    }
}

/// Run one board read with a timeout, retrying exactly once on failure.
///
/// Only reads come through here; they are safe to repeat.
async fn read_with_retry<T, F, Fut>(what: &'static str, limit: Duration, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, op()).await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => {
            warn!(read = what, %error, "board read failed, retrying once");
        }
        Err(_) => {
            warn!(read = what, limit_ms = limit.as_millis() as u64, "board read timed out, retrying once");
        }
    }

    match tokio::time::timeout(limit, op()).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!("loading {} timed out after {:?}", what, limit)),
    }
}
