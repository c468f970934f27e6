//! Core domain logic for Rosterbook.
//! This crate is the single source of truth for the employee roster state.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{new_employee_id, Department, Employee, EmployeeId, Position};
pub use model::state::{seed_roster, AppState, StatePatch};
pub use query::roster::{query_roster, RosterPage, RosterQuery, DEFAULT_PAGE_SIZE};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, STATE_SLOT,
};
pub use store::state_store::{Store, SubscriberId};
pub use validation::employee::{
    validate, validate_at, EmployeeField, SubmitMode, ValidationErrors,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
