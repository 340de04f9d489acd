//! Service-level tests for `BoardService` against the mock store.
//!
//! These exercise the load fan-out (all-or-nothing, retry, timeout) and the
//! transition path (exactly one write, routed by kind, full reload after).

use std::sync::Arc;
use std::time::Duration;

use backoffice_core::common::{EmployeeId, HallId, RoomId};
use backoffice_core::domains::housekeeping::testing::{MockInventoryStore, RecordedWrite};
use backoffice_core::domains::housekeeping::{
    Attendant, BoardError, BoardService, HousekeepingStatus, UnitKind, UnitPatch, UnitRef,
};
use backoffice_core::domains::inventory::{HallBoardRow, RoomBoardRow};

fn room_row(id: i64, number: &str, floor: &str, status: Option<&str>) -> RoomBoardRow {
    RoomBoardRow {
        id: RoomId::from_i64(id),
        room_number: number.to_string(),
        housekeeping_status: status.map(String::from),
        floor_name: Some(floor.to_string()),
        category_name: Some("Standard Double".to_string()),
        attendant_id: None,
        attendant_title: None,
        attendant_first_name: None,
        attendant_last_name: None,
    }
}

fn hall_row(id: i64, number: &str, floor: &str, status: Option<&str>) -> HallBoardRow {
    HallBoardRow {
        id: HallId::from_i64(id),
        hall_number: number.to_string(),
        housekeeping_status: status.map(String::from),
        floor_name: Some(floor.to_string()),
        category_name: Some("Banquet Hall".to_string()),
        attendant_id: None,
        attendant_title: None,
        attendant_first_name: None,
        attendant_last_name: None,
    }
}

fn attendant(id: i64, name: &str) -> Attendant {
    Attendant {
        id: EmployeeId::from_i64(id),
        display_name: name.to_string(),
        email: format!("{}@harborlight.example", name.to_lowercase().replace(' ', ".")),
    }
}

fn board_service(store: MockInventoryStore) -> (Arc<MockInventoryStore>, BoardService) {
    board_service_with_timeout(store, Duration::from_secs(5))
}

fn board_service_with_timeout(
    store: MockInventoryStore,
    timeout: Duration,
) -> (Arc<MockInventoryStore>, BoardService) {
    let store = Arc::new(store);
    let service = BoardService::new(store.clone(), timeout);
    (store, service)
}

fn calls_named(calls: &[&'static str], name: &str) -> usize {
    calls.iter().filter(|call| **call == name).count()
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn reload_merges_rooms_halls_and_attendants() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![
                room_row(1, "101", "1st Floor", Some("clean")),
                room_row(2, "102", "1st Floor", Some("dirty")),
            ])
            .with_halls(vec![hall_row(9, "H1", "1st Floor", Some("dirty"))])
            .with_attendants(vec![attendant(7, "Priya Raman"), attendant(8, "Marco Diaz")]),
    );

    let snapshot = service.reload().await.unwrap();

    let numbers: Vec<&str> = snapshot
        .entries
        .iter()
        .map(|entry| entry.display_number.as_str())
        .collect();
    assert_eq!(numbers, ["101", "102", "H1"]);
    assert_eq!(snapshot.entries[2].kind(), UnitKind::Hall);
    assert_eq!(snapshot.attendants.len(), 2);

    let calls = store.list_calls();
    assert_eq!(calls_named(&calls, "rooms"), 1);
    assert_eq!(calls_named(&calls, "halls"), 1);
    assert_eq!(calls_named(&calls, "attendants"), 1);
}

#[tokio::test]
async fn reload_fails_when_one_read_keeps_failing() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("clean"))])
            .with_halls_failures(2),
    );

    let error = service.reload().await.unwrap_err();
    assert!(matches!(error, BoardError::LoadFailed { .. }));

    // Failed once, retried once, then gave up.
    assert_eq!(calls_named(&store.list_calls(), "halls"), 2);
}

#[tokio::test]
async fn reload_retries_a_transient_read_failure() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("clean"))])
            .with_rooms_failures(1),
    );

    let snapshot = service.reload().await.unwrap();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(calls_named(&store.list_calls(), "rooms"), 2);
}

#[tokio::test]
async fn reload_gives_up_when_reads_stay_slow() {
    let (_store, service) = board_service_with_timeout(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("clean"))])
            .with_call_delay(Duration::from_millis(100)),
        Duration::from_millis(20),
    );

    let error = service.reload().await.unwrap_err();
    assert!(matches!(error, BoardError::LoadFailed { .. }));
}

// ============================================================================
// Transitions
// ============================================================================

#[tokio::test]
async fn change_status_writes_once_and_reloads() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("dirty"))])
            .with_halls(vec![hall_row(9, "H1", "1st Floor", Some("dirty"))]),
    );

    let snapshot = service
        .change_status(UnitRef::Room(RoomId::from_i64(1)), HousekeepingStatus::Clean)
        .await
        .unwrap();

    assert_eq!(
        store.update_calls(),
        vec![RecordedWrite {
            unit: UnitRef::Room(RoomId::from_i64(1)),
            patch: UnitPatch::Status(HousekeepingStatus::Clean),
        }]
    );
    assert_eq!(snapshot.entries[0].status, Some(HousekeepingStatus::Clean));
    // The hall was not touched.
    assert_eq!(snapshot.entries[1].status, Some(HousekeepingStatus::Dirty));

    // One full reload after the write, nothing before it.
    let calls = store.list_calls();
    assert_eq!(calls_named(&calls, "rooms"), 1);
    assert_eq!(calls_named(&calls, "halls"), 1);
    assert_eq!(calls_named(&calls, "attendants"), 1);
}

#[tokio::test]
async fn change_status_routes_to_the_hall_table() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_halls(vec![hall_row(9, "H1", "1st Floor", Some("dirty"))]),
    );

    let snapshot = service
        .change_status(
            UnitRef::Hall(HallId::from_i64(9)),
            HousekeepingStatus::Cleaning,
        )
        .await
        .unwrap();

    let writes = store.update_calls();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].unit, UnitRef::Hall(HallId::from_i64(9)));
    assert_eq!(
        snapshot.entries[0].status,
        Some(HousekeepingStatus::Cleaning)
    );
}

#[tokio::test]
async fn assign_sets_the_attendant_with_exactly_one_write() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("clean"))])
            .with_attendants(vec![attendant(7, "Priya Raman")]),
    );

    let snapshot = service
        .assign(
            UnitRef::Room(RoomId::from_i64(1)),
            Some(EmployeeId::from_i64(7)),
        )
        .await
        .unwrap();

    assert_eq!(
        store.update_calls(),
        vec![RecordedWrite {
            unit: UnitRef::Room(RoomId::from_i64(1)),
            patch: UnitPatch::Attendant(Some(EmployeeId::from_i64(7))),
        }]
    );
    let assigned = snapshot.entries[0].attendant.as_ref().unwrap();
    assert_eq!(assigned.id, EmployeeId::from_i64(7));
}

#[tokio::test]
async fn assign_none_clears_the_attendant() {
    let mut occupied = room_row(1, "101", "1st Floor", Some("clean"));
    occupied.attendant_id = Some(EmployeeId::from_i64(7));
    occupied.attendant_first_name = Some("Priya".to_string());
    occupied.attendant_last_name = Some("Raman".to_string());

    let (store, service) =
        board_service(MockInventoryStore::new().with_rooms(vec![occupied]));

    let snapshot = service
        .assign(UnitRef::Room(RoomId::from_i64(1)), None)
        .await
        .unwrap();

    assert_eq!(
        store.update_calls(),
        vec![RecordedWrite {
            unit: UnitRef::Room(RoomId::from_i64(1)),
            patch: UnitPatch::Attendant(None),
        }]
    );
    assert_eq!(snapshot.entries[0].attendant, None);
}

#[tokio::test]
async fn a_failed_write_is_not_retried() {
    let (store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("dirty"))])
            .with_update_failures(1),
    );

    let error = service
        .change_status(UnitRef::Room(RoomId::from_i64(1)), HousekeepingStatus::Clean)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        BoardError::TransitionFailed {
            kind: UnitKind::Room,
            id: 1,
            ..
        }
    ));
    assert_eq!(store.update_calls().len(), 1);
    // No reload happens after a failed write.
    assert!(store.list_calls().is_empty());
}

#[tokio::test]
async fn a_slow_write_times_out_without_a_retry() {
    let (store, service) = board_service_with_timeout(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("dirty"))])
            .with_call_delay(Duration::from_millis(100)),
        Duration::from_millis(20),
    );

    let error = service
        .change_status(UnitRef::Room(RoomId::from_i64(1)), HousekeepingStatus::Clean)
        .await
        .unwrap_err();

    assert!(matches!(error, BoardError::TransitionFailed { .. }));
    assert_eq!(store.update_calls().len(), 1);
    assert!(store.list_calls().is_empty());
}

#[tokio::test]
async fn writing_to_a_missing_unit_is_not_found() {
    let (store, service) = board_service(MockInventoryStore::new());

    let error = service
        .change_status(
            UnitRef::Room(RoomId::from_i64(99)),
            HousekeepingStatus::Clean,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        BoardError::UnitNotFound {
            kind: UnitKind::Room,
            id: 99,
        }
    ));
    assert!(store.list_calls().is_empty());
}

#[tokio::test]
async fn snapshots_are_immutable_across_transitions() {
    let (_store, service) = board_service(
        MockInventoryStore::new()
            .with_rooms(vec![room_row(1, "101", "1st Floor", Some("dirty"))]),
    );

    let before = service.reload().await.unwrap();
    let before_copy = before.clone();

    let after = service
        .change_status(UnitRef::Room(RoomId::from_i64(1)), HousekeepingStatus::Clean)
        .await
        .unwrap();

    // The earlier snapshot still shows the earlier state.
    assert_eq!(before, before_copy);
    assert_eq!(before.entries[0].status, Some(HousekeepingStatus::Dirty));
    assert_eq!(after.entries[0].status, Some(HousekeepingStatus::Clean));
}
