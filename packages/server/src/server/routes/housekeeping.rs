//! Housekeeping board routes
//!
//! - `GET  /api/housekeeping/board` loads the board, applies the query
//!   filters, and returns entries plus floor groups.
//! - `PUT  /api/housekeeping/{rooms,halls}/:id/status` moves one unit to a
//!   new status.
//! - `PUT  /api/housekeeping/{rooms,halls}/:id/attendant` assigns or clears
//!   one unit's attendant (`null` clears; the field must be present).
//!
//! Every write reloads and returns the full board, so the client always
//! renders persisted state, never an optimistic local edit.

use axum::{
    extract::{Extension, Path, Query},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{EmployeeId, HallId, RoomId};
use crate::domains::housekeeping::{
    apply_filters, group_by_floor, Attendant, BoardFilter, BoardSnapshot, HousekeepingStatus,
    StatusCounts, UnifiedEntry, UnitKind, UnitRef,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/board", get(get_board))
        .route("/rooms/:id/status", put(change_room_status))
        .route("/rooms/:id/attendant", put(assign_room_attendant))
        .route("/halls/:id/status", put(change_hall_status))
        .route("/halls/:id/attendant", put(assign_hall_attendant))
}

// ============================================================================
// Wire types
// ============================================================================

/// Query parameters of `GET /board`. Missing or empty means "all".
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
}

/// Body of the status transition routes.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusBody {
    pub status: String,
}

/// Body of the attendant assignment routes.
#[derive(Debug, Deserialize)]
pub struct AssignBody {
    /// Explicit `null` clears the assignment. Omitting the field entirely is
    /// rejected, so "forgot to pick" can never silently unassign.
    #[serde(default, with = "serde_with::rust::double_option")]
    pub attendant_id: Option<Option<EmployeeId>>,
}

#[derive(Debug, Serialize)]
pub struct FloorGroup {
    pub floor: String,
    pub entries: Vec<UnifiedEntry>,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Entries after filtering, in board order (rooms before halls).
    pub entries: Vec<UnifiedEntry>,
    /// The same entries grouped by floor, in first-encounter order.
    pub groups: Vec<FloorGroup>,
    pub attendants: Vec<Attendant>,
    /// Status tallies over the whole board, unaffected by filters.
    pub counts: StatusCounts,
    pub loaded_at: DateTime<Utc>,
}

impl BoardResponse {
    fn render(snapshot: BoardSnapshot, filter: &BoardFilter) -> Self {
        let counts = snapshot.status_counts();
        let entries = apply_filters(&snapshot.entries, filter);
        let groups = group_by_floor(&entries)
            .into_iter()
            .map(|(floor, entries)| FloorGroup { floor, entries })
            .collect();
        Self {
            entries,
            groups,
            attendants: snapshot.attendants,
            counts,
            loaded_at: snapshot.loaded_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn get_board(
    Extension(state): Extension<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, ApiError> {
    let filter = parse_filter(query)?;
    let snapshot = state.board.reload().await?;
    Ok(Json(BoardResponse::render(snapshot, &filter)))
}

async fn change_room_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ChangeStatusBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let status = parse_status(&body.status)?;
    let snapshot = state
        .board
        .change_status(UnitRef::Room(RoomId::from_i64(id)), status)
        .await?;
    Ok(Json(BoardResponse::render(snapshot, &BoardFilter::default())))
}

async fn change_hall_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ChangeStatusBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let status = parse_status(&body.status)?;
    let snapshot = state
        .board
        .change_status(UnitRef::Hall(HallId::from_i64(id)), status)
        .await?;
    Ok(Json(BoardResponse::render(snapshot, &BoardFilter::default())))
}

async fn assign_room_attendant(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AssignBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let attendant = selected_attendant(body)?;
    let snapshot = state
        .board
        .assign(UnitRef::Room(RoomId::from_i64(id)), attendant)
        .await?;
    Ok(Json(BoardResponse::render(snapshot, &BoardFilter::default())))
}

async fn assign_hall_attendant(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AssignBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let attendant = selected_attendant(body)?;
    let snapshot = state
        .board
        .assign(UnitRef::Hall(HallId::from_i64(id)), attendant)
        .await?;
    Ok(Json(BoardResponse::render(snapshot, &BoardFilter::default())))
}

// ============================================================================
// Parsing helpers
// ============================================================================

fn parse_filter(query: BoardQuery) -> Result<BoardFilter, ApiError> {
    let status = match query.status.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(
            raw.parse::<HousekeepingStatus>()
                .map_err(|error| ApiError::BadRequest(error.to_string()))?,
        ),
        None => None,
    };
    let kind = match query.kind.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(
            raw.parse::<UnitKind>()
                .map_err(|error| ApiError::BadRequest(error.to_string()))?,
        ),
        None => None,
    };
    Ok(BoardFilter {
        search: query.search.unwrap_or_default(),
        status,
        kind,
    })
}

fn parse_status(raw: &str) -> Result<HousekeepingStatus, ApiError> {
    raw.parse::<HousekeepingStatus>()
        .map_err(|error| ApiError::BadRequest(error.to_string()))
}

fn selected_attendant(body: AssignBody) -> Result<Option<EmployeeId>, ApiError> {
    body.attendant_id.ok_or_else(|| {
        ApiError::UnprocessableEntity(
            "attendant_id is required (use null to clear the assignment)".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter_accepts_empty_query() {
        let filter = parse_filter(BoardQuery::default()).unwrap();
        assert_eq!(filter, BoardFilter::default());
    }

    #[test]
    fn parse_filter_accepts_valid_values() {
        let filter = parse_filter(BoardQuery {
            search: Some("10".to_string()),
            status: Some("dirty".to_string()),
            kind: Some("hall".to_string()),
        })
        .unwrap();
        assert_eq!(filter.search, "10");
        assert_eq!(filter.status, Some(HousekeepingStatus::Dirty));
        assert_eq!(filter.kind, Some(UnitKind::Hall));
    }

    #[test]
    fn parse_filter_treats_empty_strings_as_unset() {
        let filter = parse_filter(BoardQuery {
            search: None,
            status: Some(String::new()),
            kind: Some(String::new()),
        })
        .unwrap();
        assert_eq!(filter, BoardFilter::default());
    }

    #[test]
    fn parse_filter_rejects_unknown_status() {
        let result = parse_filter(BoardQuery {
            search: None,
            status: Some("sparkling".to_string()),
            kind: None,
        });
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn parse_filter_rejects_unknown_kind() {
        let result = parse_filter(BoardQuery {
            search: None,
            status: None,
            kind: Some("suite".to_string()),
        });
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn assign_body_distinguishes_null_from_missing() {
        let missing: AssignBody = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.attendant_id, None);
        assert!(selected_attendant(missing).is_err());

        let cleared: AssignBody = serde_json::from_str(r#"{"attendant_id": null}"#).unwrap();
        assert_eq!(cleared.attendant_id, Some(None));
        assert_eq!(selected_attendant(cleared).unwrap(), None);

        let chosen: AssignBody = serde_json::from_str(r#"{"attendant_id": 7}"#).unwrap();
        assert_eq!(
            selected_attendant(chosen).unwrap(),
            Some(EmployeeId::from_i64(7))
        );
    }
}
