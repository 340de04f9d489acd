//! Unified status board view
//!
//! Rooms and halls live in separate tables with separate ID spaces, but the
//! housekeeping screen shows them as one list. This module merges the two
//! board projections into `UnifiedEntry` values tagged with their kind,
//! groups them by floor for display, and defines the immutable snapshot the
//! rest of the system hands around.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::common::{EmployeeId, HallId, RoomId};
use crate::domains::inventory::{HallBoardRow, RoomBoardRow};
use crate::domains::staff::models::{compose_display_name, Employee};

use super::status::HousekeepingStatus;

/// Display group for units whose floor reference is missing or blank.
pub const UNASSIGNED_FLOOR: &str = "Unassigned";

/// Display fallback for units whose category reference is missing or blank.
pub const MISSING_CATEGORY: &str = "N/A";

/// Display label for units whose status column did not parse.
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

/// The two kinds of unit that appear on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Room,
    Hall,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Room => "room",
            UnitKind::Hall => "hall",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UnitKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(UnitKind::Room),
            "hall" => Ok(UnitKind::Hall),
            _ => Err(anyhow::anyhow!(
                "Invalid unit kind: {} (expected one of: room, hall)",
                s
            )),
        }
    }
}

/// Typed reference to a unit.
///
/// The kind tag and the matching typed ID travel together, so board code can
/// never read a room ID as a hall ID or route a write to the wrong table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum UnitRef {
    Room(RoomId),
    Hall(HallId),
}

impl UnitRef {
    pub fn kind(&self) -> UnitKind {
        match self {
            UnitRef::Room(_) => UnitKind::Room,
            UnitRef::Hall(_) => UnitKind::Hall,
        }
    }

    /// The raw key, for log lines and error messages.
    pub fn raw_id(&self) -> i64 {
        match self {
            UnitRef::Room(id) => id.into_i64(),
            UnitRef::Hall(id) => id.into_i64(),
        }
    }
}

/// The attendant currently assigned to a unit, as shown on its board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendantRef {
    pub id: EmployeeId,
    pub display_name: String,
}

/// One row of the unified board: a room or hall with its display fields
/// resolved and its status parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedEntry {
    #[serde(flatten)]
    pub unit: UnitRef,
    pub display_number: String,
    pub category_name: String,
    pub floor_name: String,
    /// `None` when the stored status was NULL or unrecognized; rendered as
    /// "Unknown" rather than failing the board.
    pub status: Option<HousekeepingStatus>,
    /// Capitalized label for `status`, with the "Unknown" fallback already
    /// applied, so consumers never format a missing status themselves.
    pub status_label: &'static str,
    pub attendant: Option<AttendantRef>,
}

impl UnifiedEntry {
    pub fn kind(&self) -> UnitKind {
        self.unit.kind()
    }

    fn from_room(row: RoomBoardRow) -> Self {
        let status = HousekeepingStatus::parse_column(row.housekeeping_status.as_deref());
        Self {
            unit: UnitRef::Room(row.id),
            display_number: row.room_number,
            category_name: display_or(row.category_name, MISSING_CATEGORY),
            floor_name: display_or(row.floor_name, UNASSIGNED_FLOOR),
            status,
            status_label: status_display_label(status),
            attendant: row.attendant_id.map(|id| AttendantRef {
                id,
                display_name: compose_display_name(
                    row.attendant_title.as_deref(),
                    row.attendant_first_name.as_deref(),
                    row.attendant_last_name.as_deref(),
                ),
            }),
        }
    }

    fn from_hall(row: HallBoardRow) -> Self {
        let status = HousekeepingStatus::parse_column(row.housekeeping_status.as_deref());
        Self {
            unit: UnitRef::Hall(row.id),
            display_number: row.hall_number,
            category_name: display_or(row.category_name, MISSING_CATEGORY),
            floor_name: display_or(row.floor_name, UNASSIGNED_FLOOR),
            status,
            status_label: status_display_label(status),
            attendant: row.attendant_id.map(|id| AttendantRef {
                id,
                display_name: compose_display_name(
                    row.attendant_title.as_deref(),
                    row.attendant_first_name.as_deref(),
                    row.attendant_last_name.as_deref(),
                ),
            }),
        }
    }
}

/// Capitalized display label for a parsed status, "Unknown" for a missing
/// one.
pub fn status_display_label(status: Option<HousekeepingStatus>) -> &'static str {
    match status {
        Some(status) => status.label(),
        None => UNKNOWN_STATUS_LABEL,
    }
}

fn display_or(raw: Option<String>, fallback: &str) -> String {
    match raw {
        Some(name) if !name.trim().is_empty() => name,
        _ => fallback.to_string(),
    }
}

/// Merge room and hall rows into the single board sequence.
///
/// Rooms keep their loaded order and come first, halls follow. Two loads of
/// the same data therefore produce the same sequence.
pub fn unify(rooms: Vec<RoomBoardRow>, halls: Vec<HallBoardRow>) -> Vec<UnifiedEntry> {
    let mut entries = Vec::with_capacity(rooms.len() + halls.len());
    entries.extend(rooms.into_iter().map(UnifiedEntry::from_room));
    entries.extend(halls.into_iter().map(UnifiedEntry::from_hall));
    entries
}

/// Group entries by floor name.
///
/// Groups appear in first-encounter order and entries keep their order
/// within each group, so grouping never reorders the board.
pub fn group_by_floor(entries: &[UnifiedEntry]) -> IndexMap<String, Vec<UnifiedEntry>> {
    let mut groups: IndexMap<String, Vec<UnifiedEntry>> = IndexMap::new();
    for entry in entries {
        groups
            .entry(entry.floor_name.clone())
            .or_default()
            .push(entry.clone());
    }
    groups
}

/// An employee as offered in the assignment dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendant {
    pub id: EmployeeId,
    pub display_name: String,
    pub email: String,
}

impl From<Employee> for Attendant {
    fn from(employee: Employee) -> Self {
        let display_name = employee.display_name();
        Self {
            id: employee.id,
            display_name,
            email: employee.email,
        }
    }
}

/// One complete, successfully loaded board.
///
/// Snapshots are immutable: transitions never patch one in place, they
/// produce a fresh snapshot from a full reload. A failed reload leaves
/// whatever snapshot the caller already had untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub entries: Vec<UnifiedEntry>,
    pub attendants: Vec<Attendant>,
    pub loaded_at: DateTime<Utc>,
}

impl BoardSnapshot {
    pub fn new(entries: Vec<UnifiedEntry>, attendants: Vec<Attendant>) -> Self {
        Self {
            entries,
            attendants,
            loaded_at: Utc::now(),
        }
    }

    /// Tally of entries per status, including the ones whose status did not
    /// parse.
    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.entries)
    }
}

/// Header chip numbers for the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub clean: usize,
    pub dirty: usize,
    pub cleaning: usize,
    pub inspection: usize,
    pub maintenance: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn tally(entries: &[UnifiedEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.status {
                Some(HousekeepingStatus::Clean) => counts.clean += 1,
                Some(HousekeepingStatus::Dirty) => counts.dirty += 1,
                Some(HousekeepingStatus::Cleaning) => counts.cleaning += 1,
                Some(HousekeepingStatus::Inspection) => counts.inspection += 1,
                Some(HousekeepingStatus::Maintenance) => counts.maintenance += 1,
                None => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.clean + self.dirty + self.cleaning + self.inspection + self.maintenance + self.unknown
    }
}
