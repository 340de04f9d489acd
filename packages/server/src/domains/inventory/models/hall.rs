//! Hall model - banquet and function halls tracked on the housekeeping board
//!
//! Halls mirror rooms structurally (number, floor, category, status,
//! attendant) but live in their own table and carry hall types instead of
//! room types. On the status board they flow through the same unified entry
//! shape as rooms, always listed after them.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{EmployeeId, FloorId, HallId, HallTypeId};

/// Hall - one bookable function hall
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hall {
    pub id: HallId,
    pub hall_number: String,
    pub floor_id: Option<FloorId>,
    pub hall_type_id: Option<HallTypeId>,
    pub housekeeping_status: Option<String>,
    pub assigned_to: Option<EmployeeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hall {
    /// Create a hall
    pub async fn create(
        hall_number: String,
        floor_id: Option<FloorId>,
        hall_type_id: Option<HallTypeId>,
        housekeeping_status: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let hall = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO halls (hall_number, floor_id, hall_type_id, housekeeping_status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(hall_number)
        .bind(floor_id)
        .bind(hall_type_id)
        .bind(housekeeping_status)
        .fetch_one(pool)
        .await?;
        Ok(hall)
    }

    /// Find hall by ID (optional)
    pub async fn find_by_id_optional(id: HallId, pool: &PgPool) -> Result<Option<Self>> {
        let hall = sqlx::query_as::<_, Self>("SELECT * FROM halls WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(hall)
    }

    /// Update the housekeeping status column.
    ///
    /// Returns the number of rows affected (0 when the hall does not exist).
    pub async fn set_housekeeping_status(id: HallId, status: &str, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE halls SET housekeeping_status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Update the attendant assignment. `None` clears it.
    ///
    /// Returns the number of rows affected (0 when the hall does not exist).
    pub async fn set_attendant(
        id: HallId,
        attendant: Option<EmployeeId>,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE halls SET assigned_to = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(attendant)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

/// Joined projection of a hall as the status board needs it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct HallBoardRow {
    pub id: HallId,
    pub hall_number: String,
    pub housekeeping_status: Option<String>,
    pub floor_name: Option<String>,
    pub category_name: Option<String>,
    pub attendant_id: Option<EmployeeId>,
    pub attendant_title: Option<String>,
    pub attendant_first_name: Option<String>,
    pub attendant_last_name: Option<String>,
}

impl HallBoardRow {
    /// Load every hall with its display fields, ordered by hall number.
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT h.id,
                   h.hall_number,
                   h.housekeeping_status,
                   f.name AS floor_name,
                   ht.name AS category_name,
                   e.id AS attendant_id,
                   e.title AS attendant_title,
                   e.first_name AS attendant_first_name,
                   e.last_name AS attendant_last_name
            FROM halls h
            LEFT JOIN floors f ON f.id = h.floor_id
            LEFT JOIN hall_types ht ON ht.id = h.hall_type_id
            LEFT JOIN employees e ON e.id = h.assigned_to
            ORDER BY h.hall_number
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
