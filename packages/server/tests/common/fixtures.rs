//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data. The
//! database is shared across tests, so callers pass values (room numbers,
//! names, emails) that are unique to their test.

use anyhow::Result;
use backoffice_core::common::{EmployeeId, FloorId, HallId, HallTypeId, RoomId, RoomTypeId};
use backoffice_core::domains::inventory::{Floor, Hall, HallType, Room, RoomType};
use backoffice_core::domains::staff::models::Employee;
use sqlx::PgPool;

pub async fn create_test_floor(pool: &PgPool, name: &str) -> Result<FloorId> {
    let floor = Floor::create(name.to_string(), pool).await?;
    Ok(floor.id)
}

pub async fn create_test_room_type(pool: &PgPool, name: &str) -> Result<RoomTypeId> {
    let room_type = RoomType::create(name.to_string(), pool).await?;
    Ok(room_type.id)
}

pub async fn create_test_hall_type(pool: &PgPool, name: &str) -> Result<HallTypeId> {
    let hall_type = HallType::create(name.to_string(), pool).await?;
    Ok(hall_type.id)
}

/// Create an employee; the email is derived from the names, so the name pair
/// must be unique to the calling test.
pub async fn create_test_employee(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
) -> Result<EmployeeId> {
    let email = format!(
        "{}.{}@harborlight.example",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    let employee = Employee::create(
        None,
        first_name.to_string(),
        last_name.to_string(),
        email,
        pool,
    )
    .await?;
    Ok(employee.id)
}

pub async fn create_test_room(
    pool: &PgPool,
    room_number: &str,
    floor_id: Option<FloorId>,
    room_type_id: Option<RoomTypeId>,
    status: Option<&str>,
) -> Result<RoomId> {
    let room = Room::create(
        room_number.to_string(),
        floor_id,
        room_type_id,
        status.map(String::from),
        pool,
    )
    .await?;
    Ok(room.id)
}

pub async fn create_test_hall(
    pool: &PgPool,
    hall_number: &str,
    floor_id: Option<FloorId>,
    hall_type_id: Option<HallTypeId>,
    status: Option<&str>,
) -> Result<HallId> {
    let hall = Hall::create(
        hall_number.to_string(),
        floor_id,
        hall_type_id,
        status.map(String::from),
        pool,
    )
    .await?;
    Ok(hall.id)
}
