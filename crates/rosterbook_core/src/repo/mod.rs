//! Repository layer for the persisted application snapshot.
//!
//! # Responsibility
//! - Define the snapshot load/save contract consumed by the store.
//! - Isolate SQLite and JSON codec details from store orchestration.
//!
//! # Invariants
//! - Persisted payloads are accepted only after structural validation;
//!   raw deserialization is never trusted to produce well-typed data.
//! - Repository APIs return semantic errors (`MalformedSnapshot`) in
//!   addition to DB transport errors.

pub mod codec;
pub mod state_repo;
