//! State store orchestration.
//!
//! # Responsibility
//! - Own the authoritative in-memory snapshot.
//! - Route every mutation through persist-then-notify.
//!
//! # Invariants
//! - The store never exposes a mutable view of its internal snapshot.
//! - Persistence failures degrade to in-memory-only operation; they are
//!   recorded, never thrown.

pub mod state_store;
