//! Housekeeping status vocabulary
//!
//! The database column is freeform TEXT, so this enum is the boundary guard:
//! raw column values parse into it or become `None`, and writes only accept
//! the enum, which keeps unrecognized values from ever being written back.
//! A unit with no parseable status is shown as "Unknown" on the board; that
//! sentinel is display-only and deliberately not a variant here.

use serde::{Deserialize, Serialize};

/// The status values a unit can be moved to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HousekeepingStatus {
    Clean,
    Dirty,
    Cleaning,
    Inspection,
    Maintenance,
}

impl HousekeepingStatus {
    /// Every status, in the order the board presents them.
    pub const ALL: [HousekeepingStatus; 5] = [
        HousekeepingStatus::Clean,
        HousekeepingStatus::Dirty,
        HousekeepingStatus::Cleaning,
        HousekeepingStatus::Inspection,
        HousekeepingStatus::Maintenance,
    ];

    /// Wire and column representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HousekeepingStatus::Clean => "clean",
            HousekeepingStatus::Dirty => "dirty",
            HousekeepingStatus::Cleaning => "cleaning",
            HousekeepingStatus::Inspection => "inspection",
            HousekeepingStatus::Maintenance => "maintenance",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            HousekeepingStatus::Clean => "Clean",
            HousekeepingStatus::Dirty => "Dirty",
            HousekeepingStatus::Cleaning => "Cleaning",
            HousekeepingStatus::Inspection => "Inspection",
            HousekeepingStatus::Maintenance => "Maintenance",
        }
    }

    /// Parse a raw column value.
    ///
    /// NULL and unrecognized strings both come back as `None`; the board
    /// renders those as "Unknown" instead of refusing to load.
    pub fn parse_column(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl std::fmt::Display for HousekeepingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HousekeepingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clean" => Ok(HousekeepingStatus::Clean),
            "dirty" => Ok(HousekeepingStatus::Dirty),
            "cleaning" => Ok(HousekeepingStatus::Cleaning),
            "inspection" => Ok(HousekeepingStatus::Inspection),
            "maintenance" => Ok(HousekeepingStatus::Maintenance),
            _ => Err(anyhow::anyhow!(
                "Invalid housekeeping status: {} (expected one of: clean, dirty, cleaning, inspection, maintenance)",
                s
            )),
        }
    }
}
