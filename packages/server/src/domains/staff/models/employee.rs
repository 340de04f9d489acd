//! Employee model - staff members available for housekeeping assignment

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::EmployeeId;

/// Employee - one staff member
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: EmployeeId,
    /// Honorific shown before the name, e.g. "Ms." (optional).
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Create an employee
    pub async fn create(
        title: Option<String>,
        first_name: String,
        last_name: String,
        email: String,
        pool: &PgPool,
    ) -> Result<Self> {
        let employee = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO employees (title, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(employee)
    }

    /// Find all employees ordered by name
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let employees =
            sqlx::query_as::<_, Self>("SELECT * FROM employees ORDER BY first_name, last_name")
                .fetch_all(pool)
                .await?;
        Ok(employees)
    }

    /// Full display name as shown in assignment dropdowns and board rows.
    pub fn display_name(&self) -> String {
        compose_display_name(
            self.title.as_deref(),
            Some(&self.first_name),
            Some(&self.last_name),
        )
    }
}

/// Joins the non-empty name parts with single spaces.
///
/// Also used on joined board rows, where LEFT JOINs turn every part into an
/// `Option` even though first and last name are NOT NULL columns.
pub fn compose_display_name(
    title: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> String {
    [title, first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
