//! Inventory domain - the physical units of the property
//!
//! Rooms and halls are the two kinds of sellable unit. Both sit on a floor,
//! belong to a category (room type or hall type), and carry a housekeeping
//! status column plus an optional attendant assignment. The housekeeping
//! domain reads them through joined board projections and writes them one
//! column at a time.

pub mod models;

// Re-export models
pub use models::{
    Floor, Hall, HallBoardRow, HallType, Room, RoomBoardRow, RoomType,
};
