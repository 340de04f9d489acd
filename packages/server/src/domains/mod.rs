// Business domains
pub mod housekeeping;
pub mod inventory;
pub mod staff;
