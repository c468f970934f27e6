use rosterbook_core::db::{open_db, open_db_in_memory};
use rosterbook_core::{
    Department, Employee, Position, RepoError, SqliteStateRepository, StateRepository, Store,
    STATE_SLOT,
};
use rusqlite::{params, Connection};

fn new_hire() -> Employee {
    Employee {
        id: "hire-1".to_string(),
        first_name: "Mina".to_string(),
        last_name: "Aydin".to_string(),
        date_of_employment: "2024-02-01".to_string(),
        date_of_birth: "1996-09-12".to_string(),
        phone_number: "+12345678901".to_string(),
        email: "mina.aydin@example.com".to_string(),
        department: Department::Analytics,
        position: Position::Medior,
    }
}

#[test]
fn first_load_installs_the_seed_roster() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = Store::new(repo);

    store.load_state();

    let state = store.state();
    let ids: Vec<&str> = state
        .employees
        .iter()
        .map(|employee| employee.id.as_str())
        .collect();
    assert_eq!(ids, ["seed-1", "seed-2", "seed-3"]);
    assert_eq!(state.editing_employee, None);
    assert_eq!(state.error, None);
}

#[test]
fn mutations_round_trip_through_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    store.load_state();

    store.add_employee(new_hire());
    assert_eq!(store.state().employees.len(), 4);

    // Raw read-back of the slot, independent of the live store.
    let persisted = SqliteStateRepository::try_new(&conn)
        .unwrap()
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(persisted.employees.len(), 4);
    assert_eq!(persisted.employees[3].id, "hire-1");

    store.delete_employee(&"seed-2".to_string());
    let state = store.state();
    assert_eq!(state.employees.len(), 3);
    assert!(state.employees.iter().all(|employee| employee.id != "seed-2"));
    assert!(state.employees.iter().any(|employee| employee.id == "seed-1"));
    assert!(state.employees.iter().any(|employee| employee.id == "seed-3"));
}

#[test]
fn reset_round_trips_as_empty_state_not_seed_data() {
    let conn = open_db_in_memory().unwrap();
    let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    store.load_state();
    assert_eq!(store.state().employees.len(), 3);

    store.reset();

    // A fresh store over the same storage sees the persisted empty
    // snapshot, not the first-run seed path.
    let mut reloaded = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    reloaded.load_state();
    let state = reloaded.state();
    assert!(state.employees.is_empty());
    assert_eq!(state.editing_employee, None);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn roster_survives_a_process_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("rosterbook.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
        store.load_state();
        store.add_employee(new_hire());
        assert_eq!(store.state().employees.len(), 4);
    }

    let conn = open_db(&db_path).unwrap();
    let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    store.load_state();

    let state = store.state();
    assert_eq!(state.employees.len(), 4);
    assert!(state.employees.iter().any(|employee| employee.id == "hire-1"));
}

#[test]
fn malformed_slot_payload_keeps_the_default_snapshot() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO state_slots (slot, payload) VALUES (?1, ?2);",
        params![STATE_SLOT, "not json at all"],
    )
    .unwrap();

    let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    store.load_state();

    let state = store.state();
    assert!(state.employees.is_empty());
    assert_eq!(state.error, None);
}

#[test]
fn structurally_invalid_slot_payload_keeps_the_default_snapshot() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO state_slots (slot, payload) VALUES (?1, ?2);",
        params![
            STATE_SLOT,
            r#"{"employees": 42, "loading": false, "error": null}"#
        ],
    )
    .unwrap();

    let mut store = Store::new(SqliteStateRepository::try_new(&conn).unwrap());
    store.load_state();

    assert!(store.state().employees.is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteStateRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_slot_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    let result = SqliteStateRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("state_slots"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE state_slots (slot TEXT PRIMARY KEY NOT NULL);
         PRAGMA user_version = 1;",
    )
    .unwrap();

    let result = SqliteStateRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "state_slots",
            column: "payload"
        })
    ));
}
