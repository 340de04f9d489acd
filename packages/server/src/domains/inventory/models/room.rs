//! Room model - guest rooms tracked on the housekeeping board
//!
//! The `housekeeping_status` column is freeform TEXT and nullable: rows
//! written before the current status vocabulary, or imported from the legacy
//! system, may hold NULL or unrecognized values. The column is parsed into
//! `HousekeepingStatus` at the board boundary; writes only ever go through
//! the typed enum, so the set of known values can never grow from this side.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{EmployeeId, FloorId, RoomId, RoomTypeId};

/// Room - one rentable guest room
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub floor_id: Option<FloorId>,
    pub room_type_id: Option<RoomTypeId>,
    pub housekeeping_status: Option<String>,
    pub assigned_to: Option<EmployeeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a room
    pub async fn create(
        room_number: String,
        floor_id: Option<FloorId>,
        room_type_id: Option<RoomTypeId>,
        housekeeping_status: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let room = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO rooms (room_number, floor_id, room_type_id, housekeeping_status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(room_number)
        .bind(floor_id)
        .bind(room_type_id)
        .bind(housekeeping_status)
        .fetch_one(pool)
        .await?;
        Ok(room)
    }

    /// Find room by ID (optional)
    pub async fn find_by_id_optional(id: RoomId, pool: &PgPool) -> Result<Option<Self>> {
        let room = sqlx::query_as::<_, Self>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(room)
    }

    /// Update the housekeeping status column.
    ///
    /// Returns the number of rows affected (0 when the room does not exist).
    pub async fn set_housekeeping_status(id: RoomId, status: &str, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE rooms SET housekeeping_status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Update the attendant assignment. `None` clears it.
    ///
    /// Returns the number of rows affected (0 when the room does not exist).
    pub async fn set_attendant(
        id: RoomId,
        attendant: Option<EmployeeId>,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE rooms SET assigned_to = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(attendant)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

/// Joined projection of a room as the status board needs it.
///
/// Display fields are resolved from the floor, category, and attendant
/// references in a single query. References that are missing (or point at
/// deleted rows) come back NULL and get display fallbacks when the row is
/// unified into the board.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RoomBoardRow {
    pub id: RoomId,
    pub room_number: String,
    pub housekeeping_status: Option<String>,
    pub floor_name: Option<String>,
    pub category_name: Option<String>,
    pub attendant_id: Option<EmployeeId>,
    pub attendant_title: Option<String>,
    pub attendant_first_name: Option<String>,
    pub attendant_last_name: Option<String>,
}

impl RoomBoardRow {
    /// Load every room with its display fields, ordered by room number.
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT r.id,
                   r.room_number,
                   r.housekeeping_status,
                   f.name AS floor_name,
                   rt.name AS category_name,
                   e.id AS attendant_id,
                   e.title AS attendant_title,
                   e.first_name AS attendant_first_name,
                   e.last_name AS attendant_last_name
            FROM rooms r
            LEFT JOIN floors f ON f.id = r.floor_id
            LEFT JOIN room_types rt ON rt.id = r.room_type_id
            LEFT JOIN employees e ON e.id = r.assigned_to
            ORDER BY r.room_number
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
