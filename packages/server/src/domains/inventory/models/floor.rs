//! Floor model - physical floors of the property
//!
//! Floors are pure reference data. The status board groups units by floor
//! name; units whose floor reference is missing fall into the "Unassigned"
//! group at display time rather than failing the load.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::FloorId;

/// Floor - one physical floor, e.g. "1st Floor" or "Rooftop"
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Floor {
    /// Create a floor
    pub async fn create(name: String, pool: &PgPool) -> Result<Self> {
        let floor = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO floors (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(floor)
    }

    /// Find all floors ordered by name
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let floors = sqlx::query_as::<_, Self>("SELECT * FROM floors ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(floors)
    }
}
