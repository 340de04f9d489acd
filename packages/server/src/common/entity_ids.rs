//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use backoffice_core::common::{HallId, RoomId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let room_id: RoomId = RoomId::from_i64(1);
//! let hall_id: HallId = HallId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: HallId = room_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Room entities (guest rooms).
pub struct Room;

/// Marker type for Hall entities (banquet and function halls).
pub struct Hall;

/// Marker type for Floor entities (physical floors of the property).
pub struct Floor;

/// Marker type for RoomType entities (room categories).
pub struct RoomType;

/// Marker type for HallType entities (hall categories).
pub struct HallType;

/// Marker type for Employee entities (staff members).
pub struct Employee;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Room entities.
pub type RoomId = Id<Room>;

/// Typed ID for Hall entities.
pub type HallId = Id<Hall>;

/// Typed ID for Floor entities.
pub type FloorId = Id<Floor>;

/// Typed ID for RoomType entities.
pub type RoomTypeId = Id<RoomType>;

/// Typed ID for HallType entities.
pub type HallTypeId = Id<HallType>;

/// Typed ID for Employee entities.
pub type EmployeeId = Id<Employee>;
