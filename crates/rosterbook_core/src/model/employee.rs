//! Employee domain record.
//!
//! # Responsibility
//! - Define the canonical employment record held by the roster.
//! - Provide the department/position enumerations and their wire names.
//!
//! # Invariants
//! - `id` is stable and never reused for another employee.
//! - Calendar dates are carried as ISO `YYYY-MM-DD` strings; parsing and
//!   range rules live in the validation layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier for an employee record.
///
/// Kept as a plain string so that externally assigned ids (seed data,
/// imports) round-trip unchanged through the persisted snapshot.
pub type EmployeeId = String;

/// Returns a freshly generated random employee id.
///
/// Identity generation is delegated to the UUID collaborator; the rest of
/// the core only ever treats ids as opaque strings.
pub fn new_employee_id() -> EmployeeId {
    Uuid::new_v4().to_string()
}

/// Organizational unit an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
}

/// Seniority level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Department {
    /// Canonical display/wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
        }
    }

    /// Parses a wire name back into a department.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Analytics" => Some(Self::Analytics),
            "Tech" => Some(Self::Tech),
            _ => None,
        }
    }
}

impl Position {
    /// Canonical display/wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }

    /// Parses a wire name back into a position.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Junior" => Some(Self::Junior),
            "Medior" => Some(Self::Medior),
            "Senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employment record.
///
/// Field names are serialized in camelCase to match the persisted
/// snapshot shape (`firstName`, `dateOfEmployment`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable opaque id, immutable once assigned.
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_employment: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub phone_number: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}
