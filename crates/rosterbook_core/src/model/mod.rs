//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the canonical employee record and the application snapshot.
//! - Keep one shape shared by the store, the persisted slot and callers.
//!
//! # Invariants
//! - Every employee is identified by a stable opaque `EmployeeId`.
//! - The snapshot is a value: mutation always produces a new `AppState`.

pub mod employee;
pub mod state;
