//! CLI smoke entry point.
//!
//! # Responsibility
//! - Act as the explicit composition root: construct the store once and
//!   thread it to consumers.
//! - Keep output deterministic for quick local sanity checks.

use rosterbook_core::db::open_db_in_memory;
use rosterbook_core::{core_version, SqliteStateRepository, Store};

fn main() {
    if let Err(err) = run() {
        eprintln!("rosterbook_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteStateRepository::try_new(&conn)?;
    let mut store = Store::new(repo);
    store.load_state();

    let state = store.state();
    println!("rosterbook_core version={}", core_version());
    println!(
        "employees={} editing={} loading={} error={}",
        state.employees.len(),
        state.editing_employee.is_some(),
        state.loading,
        state.error.as_deref().unwrap_or("none")
    );
    Ok(())
}
