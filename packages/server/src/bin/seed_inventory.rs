// Seeds the inventory schema from a JSON file. The file path is taken from
// the first argument, defaulting to data/inventory_seed.json.
//
// Idempotent at the dataset level: if any floors already exist the seed
// aborts, so running it twice cannot duplicate units.

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;

use backoffice_core::common::{FloorId, HallTypeId, RoomTypeId};
use backoffice_core::config::Config;
use backoffice_core::domains::inventory::{Floor, Hall, HallType, Room, RoomType};
use backoffice_core::domains::staff::models::Employee;

const DEFAULT_SEED_PATH: &str = "data/inventory_seed.json";

#[derive(Debug, Deserialize)]
struct SeedData {
    floors: Vec<String>,
    room_types: Vec<String>,
    hall_types: Vec<String>,
    employees: Vec<EmployeeInput>,
    rooms: Vec<RoomInput>,
    halls: Vec<HallInput>,
}

#[derive(Debug, Deserialize)]
struct EmployeeInput {
    title: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct RoomInput {
    number: String,
    floor: Option<String>,
    room_type: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HallInput {
    number: String,
    floor: Option<String>,
    hall_type: Option<String>,
    status: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config = Config::from_env()?;

    // Connect to database
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    println!("✓ Connected to database");

    let existing = Floor::find_all(&pool).await?;
    if !existing.is_empty() {
        println!(
            "⊘ Inventory already seeded ({} floors present), nothing to do",
            existing.len()
        );
        return Ok(());
    }

    // Read seed data
    let path = seed_data_path(std::env::args());
    let json_data = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed data from {}", path))?;
    let seed_data: SeedData =
        serde_json::from_str(&json_data).context("Failed to parse seed data")?;

    println!(
        "✓ Loaded seed data: {} floors, {} rooms, {} halls, {} employees",
        seed_data.floors.len(),
        seed_data.rooms.len(),
        seed_data.halls.len(),
        seed_data.employees.len()
    );

    let mut floor_ids: HashMap<String, FloorId> = HashMap::new();
    for name in &seed_data.floors {
        let floor = Floor::create(name.clone(), &pool).await?;
        floor_ids.insert(name.clone(), floor.id);
    }
    println!("✓ Created {} floors", floor_ids.len());

    let mut room_type_ids: HashMap<String, RoomTypeId> = HashMap::new();
    for name in &seed_data.room_types {
        let room_type = RoomType::create(name.clone(), &pool).await?;
        room_type_ids.insert(name.clone(), room_type.id);
    }
    println!("✓ Created {} room types", room_type_ids.len());

    let mut hall_type_ids: HashMap<String, HallTypeId> = HashMap::new();
    for name in &seed_data.hall_types {
        let hall_type = HallType::create(name.clone(), &pool).await?;
        hall_type_ids.insert(name.clone(), hall_type.id);
    }
    println!("✓ Created {} hall types", hall_type_ids.len());

    for input in &seed_data.employees {
        Employee::create(
            input.title.clone(),
            input.first_name.clone(),
            input.last_name.clone(),
            input.email.clone(),
            &pool,
        )
        .await?;
    }
    println!("✓ Created {} employees", seed_data.employees.len());

    let mut created_rooms = 0;
    for input in &seed_data.rooms {
        let floor_id = lookup(&floor_ids, input.floor.as_deref(), "floor", &input.number)?;
        let room_type_id = lookup(
            &room_type_ids,
            input.room_type.as_deref(),
            "room type",
            &input.number,
        )?;
        Room::create(
            input.number.clone(),
            floor_id,
            room_type_id,
            input.status.clone(),
            &pool,
        )
        .await?;
        created_rooms += 1;
    }
    println!("✓ Created {} rooms", created_rooms);

    let mut created_halls = 0;
    for input in &seed_data.halls {
        let floor_id = lookup(&floor_ids, input.floor.as_deref(), "floor", &input.number)?;
        let hall_type_id = lookup(
            &hall_type_ids,
            input.hall_type.as_deref(),
            "hall type",
            &input.number,
        )?;
        Hall::create(
            input.number.clone(),
            floor_id,
            hall_type_id,
            input.status.clone(),
            &pool,
        )
        .await?;
        created_halls += 1;
    }
    println!("✓ Created {} halls", created_halls);

    println!(
        "\n✅ Seed complete: {} rooms and {} halls across {} floors",
        created_rooms,
        created_halls,
        seed_data.floors.len()
    );

    Ok(())
}

/// Resolve an optional reference name against the ids created above.
///
/// A missing name is fine (the unit lands in the "Unassigned" group); a name
/// that is present but unknown is a broken seed file and aborts.
fn lookup<T: Copy>(
    ids: &HashMap<String, T>,
    name: Option<&str>,
    what: &str,
    unit: &str,
) -> Result<Option<T>> {
    match name {
        None => Ok(None),
        Some(name) => ids.get(name).copied().map(Some).ok_or_else(|| {
            anyhow::anyhow!("Unknown {} '{}' referenced by unit {}", what, name, unit)
        }),
    }
}

/// Seed file path: the first argument when given, the bundled file otherwise.
fn seed_data_path(mut args: impl Iterator<Item = String>) -> String {
    args.nth(1)
        .unwrap_or_else(|| DEFAULT_SEED_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_path_defaults_to_bundled_file() {
        let args = vec!["seed_inventory".to_string()].into_iter();
        assert_eq!(seed_data_path(args), DEFAULT_SEED_PATH);
    }

    #[test]
    fn seed_path_prefers_the_first_argument() {
        let args = vec![
            "seed_inventory".to_string(),
            "/tmp/alternate_seed.json".to_string(),
        ]
        .into_iter();
        assert_eq!(seed_data_path(args), "/tmp/alternate_seed.json");
    }
}
