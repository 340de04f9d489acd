//! Board filters
//!
//! The three filters are pure and conjunctive: text search over the display
//! fields, exact status match, exact kind match. An unset filter matches
//! everything, so the default `BoardFilter` passes the board through
//! unchanged. Filtering never mutates or reorders entries.

use super::board::{UnifiedEntry, UnitKind};
use super::status::HousekeepingStatus;

/// The staff-facing filter controls of the status board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    /// Case-insensitive substring matched against display number, category
    /// name, and floor name. Surrounding whitespace is ignored, so a
    /// whitespace-only search matches everything.
    pub search: String,
    pub status: Option<HousekeepingStatus>,
    pub kind: Option<UnitKind>,
}

impl BoardFilter {
    /// All three predicates must hold.
    pub fn matches(&self, entry: &UnifiedEntry) -> bool {
        self.matches_search(entry) && self.matches_status(entry) && self.matches_kind(entry)
    }

    fn matches_search(&self, entry: &UnifiedEntry) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &entry.display_number,
            &entry.category_name,
            &entry.floor_name,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    // Units whose status did not parse only show up when no status filter is
    // set; "unknown" is not a selectable filter value.
    fn matches_status(&self, entry: &UnifiedEntry) -> bool {
        match self.status {
            None => true,
            Some(want) => entry.status == Some(want),
        }
    }

    fn matches_kind(&self, entry: &UnifiedEntry) -> bool {
        match self.kind {
            None => true,
            Some(want) => entry.kind() == want,
        }
    }
}

/// Apply the filter, preserving entry order.
pub fn apply_filters(entries: &[UnifiedEntry], filter: &BoardFilter) -> Vec<UnifiedEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{HallId, RoomId};
    use crate::domains::housekeeping::board::{status_display_label, UnitRef};

    fn entry(kind: UnitRef, number: &str, category: &str, floor: &str, status: Option<HousekeepingStatus>) -> UnifiedEntry {
        UnifiedEntry {
            unit: kind,
            display_number: number.to_string(),
            category_name: category.to_string(),
            floor_name: floor.to_string(),
            status,
            status_label: status_display_label(status),
            attendant: None,
        }
    }

    fn sample_board() -> Vec<UnifiedEntry> {
        vec![
            entry(
                UnitRef::Room(RoomId::from_i64(1)),
                "101",
                "Standard Double",
                "1st Floor",
                Some(HousekeepingStatus::Dirty),
            ),
            entry(
                UnitRef::Room(RoomId::from_i64(2)),
                "201",
                "Deluxe Suite",
                "2nd Floor",
                Some(HousekeepingStatus::Clean),
            ),
            entry(
                UnitRef::Hall(HallId::from_i64(1)),
                "H1",
                "Banquet Hall",
                "1st Floor",
                None,
            ),
        ]
    }

    #[test]
    fn default_filter_is_identity() {
        let board = sample_board();
        assert_eq!(apply_filters(&board, &BoardFilter::default()), board);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let board = sample_board();
        let filter = BoardFilter {
            search: "bAnQuEt".to_string(),
            ..Default::default()
        };
        let matched = apply_filters(&board, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].display_number, "H1");
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let board = sample_board();
        let filter = BoardFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&board, &filter), board);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let board = sample_board();
        let filter = BoardFilter {
            search: "1st".to_string(),
            status: Some(HousekeepingStatus::Dirty),
            kind: Some(UnitKind::Room),
        };
        let matched = apply_filters(&board, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].display_number, "101");
    }

    #[test]
    fn status_filter_excludes_unknown_entries() {
        let board = sample_board();
        let filter = BoardFilter {
            status: Some(HousekeepingStatus::Clean),
            ..Default::default()
        };
        let matched = apply_filters(&board, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].display_number, "201");
    }
}
