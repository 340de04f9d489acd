//! Unit category models - room types and hall types
//!
//! Categories describe a unit's class ("Standard Double", "Conference Hall").
//! The status board shows the category name next to each unit and lets staff
//! search by it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{HallTypeId, RoomTypeId};

/// RoomType - category a guest room belongs to
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl RoomType {
    /// Create a room type
    pub async fn create(name: String, pool: &PgPool) -> Result<Self> {
        let room_type = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO room_types (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(room_type)
    }

    /// Find all room types ordered by name
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let room_types = sqlx::query_as::<_, Self>("SELECT * FROM room_types ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(room_types)
    }
}

/// HallType - category a function hall belongs to
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HallType {
    pub id: HallTypeId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl HallType {
    /// Create a hall type
    pub async fn create(name: String, pool: &PgPool) -> Result<Self> {
        let hall_type = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO hall_types (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(hall_type)
    }

    /// Find all hall types ordered by name
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let hall_types = sqlx::query_as::<_, Self>("SELECT * FROM hall_types ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(hall_types)
    }
}
