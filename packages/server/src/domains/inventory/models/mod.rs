//! Inventory domain models

pub mod category;
pub mod floor;
pub mod hall;
pub mod room;

pub use category::{HallType, RoomType};
pub use floor::Floor;
pub use hall::{Hall, HallBoardRow};
pub use room::{Room, RoomBoardRow};
