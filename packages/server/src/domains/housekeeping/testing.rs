// MockInventoryStore - in-memory store double for board tests
//
// Canned rows go in through the builder, every call is recorded, and
// failures or delays can be injected per collection to exercise the
// service's retry and timeout behavior.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::common::{HallId, RoomId};
use crate::domains::inventory::{HallBoardRow, RoomBoardRow};

use super::board::{Attendant, UnitRef};
use super::store::{InventoryStore, UnitPatch};

/// One write captured by the mock, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub unit: UnitRef,
    pub patch: UnitPatch,
}

pub struct MockInventoryStore {
    rooms: Arc<Mutex<Vec<RoomBoardRow>>>,
    halls: Arc<Mutex<Vec<HallBoardRow>>>,
    attendants: Arc<Mutex<Vec<Attendant>>>,
    rooms_failures: Arc<Mutex<u32>>,
    halls_failures: Arc<Mutex<u32>>,
    attendants_failures: Arc<Mutex<u32>>,
    update_failures: Arc<Mutex<u32>>,
    call_delay: Arc<Mutex<Option<Duration>>>,
    list_calls: Arc<Mutex<Vec<&'static str>>>,
    update_calls: Arc<Mutex<Vec<RecordedWrite>>>,
}

impl MockInventoryStore {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(Mutex::new(Vec::new())),
            halls: Arc::new(Mutex::new(Vec::new())),
            attendants: Arc::new(Mutex::new(Vec::new())),
            rooms_failures: Arc::new(Mutex::new(0)),
            halls_failures: Arc::new(Mutex::new(0)),
            attendants_failures: Arc::new(Mutex::new(0)),
            update_failures: Arc::new(Mutex::new(0)),
            call_delay: Arc::new(Mutex::new(None)),
            list_calls: Arc::new(Mutex::new(Vec::new())),
            update_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_rooms(self, rooms: Vec<RoomBoardRow>) -> Self {
        *self.rooms.lock().unwrap() = rooms;
        self
    }

    pub fn with_halls(self, halls: Vec<HallBoardRow>) -> Self {
        *self.halls.lock().unwrap() = halls;
        self
    }

    pub fn with_attendants(self, attendants: Vec<Attendant>) -> Self {
        *self.attendants.lock().unwrap() = attendants;
        self
    }

    /// The next `count` calls to `list_rooms` fail.
    pub fn with_rooms_failures(self, count: u32) -> Self {
        *self.rooms_failures.lock().unwrap() = count;
        self
    }

    /// The next `count` calls to `list_halls` fail.
    pub fn with_halls_failures(self, count: u32) -> Self {
        *self.halls_failures.lock().unwrap() = count;
        self
    }

    /// The next `count` calls to `list_attendants` fail.
    pub fn with_attendants_failures(self, count: u32) -> Self {
        *self.attendants_failures.lock().unwrap() = count;
        self
    }

    /// The next `count` update calls fail (after being recorded).
    pub fn with_update_failures(self, count: u32) -> Self {
        *self.update_failures.lock().unwrap() = count;
        self
    }

    /// Every store call sleeps this long before answering, so tests can
    /// drive the service timeout.
    pub fn with_call_delay(self, delay: Duration) -> Self {
        *self.call_delay.lock().unwrap() = Some(delay);
        self
    }

    /// Names of the list calls made so far, in order.
    pub fn list_calls(&self) -> Vec<&'static str> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Writes recorded so far, in order. Writes are recorded before any
    /// injected failure or delay takes effect, so timed-out attempts count.
    pub fn update_calls(&self) -> Vec<RecordedWrite> {
        self.update_calls.lock().unwrap().clone()
    }

    async fn maybe_delay(&self) {
        let delay = *self.call_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn take_failure(counter: &Mutex<u32>) -> bool {
    let mut remaining = counter.lock().unwrap();
    if *remaining > 0 {
        *remaining -= 1;
        true
    } else {
        false
    }
}

#[async_trait]
impl InventoryStore for MockInventoryStore {
    async fn list_rooms(&self) -> Result<Vec<RoomBoardRow>> {
        self.list_calls.lock().unwrap().push("rooms");
        self.maybe_delay().await;
        if take_failure(&self.rooms_failures) {
            return Err(anyhow!("injected rooms failure"));
        }
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn list_halls(&self) -> Result<Vec<HallBoardRow>> {
        self.list_calls.lock().unwrap().push("halls");
        self.maybe_delay().await;
        if take_failure(&self.halls_failures) {
            return Err(anyhow!("injected halls failure"));
        }
        Ok(self.halls.lock().unwrap().clone())
    }

    async fn list_attendants(&self) -> Result<Vec<Attendant>> {
        self.list_calls.lock().unwrap().push("attendants");
        self.maybe_delay().await;
        if take_failure(&self.attendants_failures) {
            return Err(anyhow!("injected attendants failure"));
        }
        Ok(self.attendants.lock().unwrap().clone())
    }

    async fn update_room(&self, id: RoomId, patch: UnitPatch) -> Result<u64> {
        self.update_calls.lock().unwrap().push(RecordedWrite {
            unit: UnitRef::Room(id),
            patch,
        });
        self.maybe_delay().await;
        if take_failure(&self.update_failures) {
            return Err(anyhow!("injected update failure"));
        }
        let mut rooms = self.rooms.lock().unwrap();
        match rooms.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                apply_room_patch(row, patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_hall(&self, id: HallId, patch: UnitPatch) -> Result<u64> {
        self.update_calls.lock().unwrap().push(RecordedWrite {
            unit: UnitRef::Hall(id),
            patch,
        });
        self.maybe_delay().await;
        if take_failure(&self.update_failures) {
            return Err(anyhow!("injected update failure"));
        }
        let mut halls = self.halls.lock().unwrap();
        match halls.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                apply_hall_patch(row, patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

fn apply_room_patch(row: &mut RoomBoardRow, patch: UnitPatch) {
    match patch {
        UnitPatch::Status(status) => {
            row.housekeeping_status = Some(status.as_str().to_string());
        }
        UnitPatch::Attendant(attendant) => {
            row.attendant_id = attendant;
            row.attendant_title = None;
            row.attendant_first_name = None;
            row.attendant_last_name = None;
        }
    }
}

fn apply_hall_patch(row: &mut HallBoardRow, patch: UnitPatch) {
    match patch {
        UnitPatch::Status(status) => {
            row.housekeeping_status = Some(status.as_str().to_string());
        }
        UnitPatch::Attendant(attendant) => {
            row.attendant_id = attendant;
            row.attendant_title = None;
            row.attendant_first_name = None;
            row.attendant_last_name = None;
        }
    }
}
