//! Pure read-side helpers over the roster.
//!
//! # Responsibility
//! - Filter and paginate a roster snapshot for list views.
//!
//! # Invariants
//! - Query helpers never mutate state; they operate on the snapshot a
//!   caller already holds.

pub mod roster;
