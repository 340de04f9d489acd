//! Housekeeping domain - the unified status board
//!
//! This domain owns the back-office housekeeping screen: rooms and halls
//! merged into one floor-grouped view, filtered in memory, with per-unit
//! status transitions and attendant assignment. Persistence goes through
//! the `InventoryStore` trait; the running server plugs in the Postgres
//! implementation while tests plug in `MockInventoryStore`.

pub mod board;
pub mod errors;
pub mod filters;
pub mod service;
pub mod status;
pub mod store;
pub mod testing;

// Re-export the board vocabulary
pub use board::{
    group_by_floor, status_display_label, unify, Attendant, AttendantRef, BoardSnapshot,
    StatusCounts, UnifiedEntry, UnitKind, UnitRef, MISSING_CATEGORY, UNASSIGNED_FLOOR,
    UNKNOWN_STATUS_LABEL,
};
pub use errors::BoardError;
pub use filters::{apply_filters, BoardFilter};
pub use service::BoardService;
pub use status::HousekeepingStatus;
pub use store::{InventoryStore, PgInventoryStore, UnitPatch};
