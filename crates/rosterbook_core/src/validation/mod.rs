//! Draft validation for form submissions.
//!
//! # Responsibility
//! - Turn a candidate employee record into a field-keyed set of
//!   human-readable error messages.
//!
//! # Invariants
//! - Validation is pure: no side effects, no I/O, deterministic for a
//!   fixed "today".
//! - An empty error set is the only green light for submission.

pub mod employee;
