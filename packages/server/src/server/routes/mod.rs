// HTTP routes
pub mod health;
pub mod housekeeping;

pub use health::*;
