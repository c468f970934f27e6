//! Application snapshot and partial-update shapes.
//!
//! # Responsibility
//! - Define `AppState`, the whole persisted/in-memory snapshot.
//! - Define `StatePatch`, the shallow-merge partial accepted by the store.
//! - Provide the fixed seed roster installed on first run.
//!
//! # Invariants
//! - `AppState::default()` is the empty snapshot: no employees, no edit
//!   target, `loading = false`, `error = None`.
//! - Merging a patch never mutates the source snapshot.

use crate::model::employee::{Department, Employee, Position};
use serde::Serialize;

/// The whole application snapshot.
///
/// Serialized in camelCase; this struct is also the exact shape of the
/// durable slot payload. Deserialization of persisted payloads goes
/// through the structural decoder in the repo layer, not through serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Ordered roster; insertion order is display order.
    pub employees: Vec<Employee>,
    /// The record currently loaded into the edit form, if any.
    pub editing_employee: Option<Employee>,
    /// Advisory busy flag for UI collaborators.
    pub loading: bool,
    /// Advisory last-error message, e.g. a failed persist.
    pub error: Option<String>,
}

impl AppState {
    /// Returns a new snapshot with the patch shallow-merged on top.
    pub fn merged(&self, patch: StatePatch) -> Self {
        let mut next = self.clone();
        if let Some(employees) = patch.employees {
            next.employees = employees;
        }
        if let Some(editing_employee) = patch.editing_employee {
            next.editing_employee = editing_employee;
        }
        if let Some(loading) = patch.loading {
            next.loading = loading;
        }
        if let Some(error) = patch.error {
            next.error = error;
        }
        next
    }
}

/// Shallow-merge partial for `Store::set_state`.
///
/// Nullable snapshot fields are doubly optional so that "leave unchanged"
/// and "set to none" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub employees: Option<Vec<Employee>>,
    pub editing_employee: Option<Option<Employee>>,
    pub loading: Option<bool>,
    pub error: Option<Option<String>>,
}

/// Fixed demo roster used to initialize the durable slot on first run.
pub fn seed_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: "seed-1".to_string(),
            first_name: "Betty".to_string(),
            last_name: "Bet".to_string(),
            date_of_employment: "2020-01-15".to_string(),
            date_of_birth: "1990-04-02".to_string(),
            phone_number: "+90 532 123 4567".to_string(),
            email: "betty.bet@example.com".to_string(),
            department: Department::Tech,
            position: Position::Senior,
        },
        Employee {
            id: "seed-2".to_string(),
            first_name: "Rose".to_string(),
            last_name: "Erk".to_string(),
            date_of_employment: "2022-06-01".to_string(),
            date_of_birth: "1998-11-23".to_string(),
            phone_number: "+90 532 765 4321".to_string(),
            email: "rose.erk@example.com".to_string(),
            department: Department::Analytics,
            position: Position::Junior,
        },
        Employee {
            id: "seed-3".to_string(),
            first_name: "Deniz".to_string(),
            last_name: "Kaya".to_string(),
            date_of_employment: "2021-03-10".to_string(),
            date_of_birth: "1994-07-30".to_string(),
            phone_number: "+90 533 246 8012".to_string(),
            email: "deniz.kaya@example.com".to_string(),
            department: Department::Tech,
            position: Position::Medior,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{seed_roster, AppState, StatePatch};
    use std::collections::HashSet;

    #[test]
    fn default_snapshot_is_empty() {
        let state = AppState::default();
        assert!(state.employees.is_empty());
        assert_eq!(state.editing_employee, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn merged_keeps_unpatched_fields() {
        let base = AppState {
            employees: seed_roster(),
            loading: true,
            ..AppState::default()
        };

        let next = base.merged(StatePatch {
            error: Some(Some("disk full".to_string())),
            ..StatePatch::default()
        });

        assert_eq!(next.employees, base.employees);
        assert!(next.loading);
        assert_eq!(next.error.as_deref(), Some("disk full"));
    }

    #[test]
    fn merged_can_clear_nullable_fields() {
        let base = AppState {
            editing_employee: seed_roster().into_iter().next(),
            error: Some("stale".to_string()),
            ..AppState::default()
        };

        let next = base.merged(StatePatch {
            editing_employee: Some(None),
            error: Some(None),
            ..StatePatch::default()
        });

        assert_eq!(next.editing_employee, None);
        assert_eq!(next.error, None);
    }

    #[test]
    fn seed_roster_has_three_distinct_records() {
        let roster = seed_roster();
        assert_eq!(roster.len(), 3);

        let ids: HashSet<_> = roster.iter().map(|employee| employee.id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["seed-1", "seed-2", "seed-3"]));

        let emails: HashSet<_> = roster
            .iter()
            .map(|employee| employee.email.as_str())
            .collect();
        assert_eq!(emails.len(), 3);
    }
}
