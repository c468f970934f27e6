//! JSON codec for the persisted snapshot payload.
//!
//! # Responsibility
//! - Encode `AppState` into the slot payload.
//! - Decode payloads through an explicit structural decoder: every
//!   required field's presence and type is checked before the value is
//!   accepted.
//!
//! # Invariants
//! - A payload that fails any shape check is rejected wholesale; the
//!   decoder never produces a partially valid snapshot.

use crate::model::employee::{Department, Employee, Position};
use crate::model::state::AppState;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shape violation found while decoding a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotShapeError {
    pub reason: String,
}

impl SnapshotShapeError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for SnapshotShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed snapshot payload: {}", self.reason)
    }
}

impl Error for SnapshotShapeError {}

/// Serializes a snapshot into the JSON slot payload.
pub fn encode_app_state(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Decodes a slot payload into a snapshot, validating the whole shape.
pub fn decode_app_state(payload: &str) -> Result<AppState, SnapshotShapeError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| SnapshotShapeError::new(format!("payload is not valid JSON: {err}")))?;
    let root = value
        .as_object()
        .ok_or_else(|| SnapshotShapeError::new("snapshot root must be a JSON object"))?;

    let employees_value = root
        .get("employees")
        .ok_or_else(|| SnapshotShapeError::new("missing `employees`"))?;
    let entries = employees_value
        .as_array()
        .ok_or_else(|| SnapshotShapeError::new("`employees` must be an array"))?;
    let mut employees = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let employee = decode_employee(entry)
            .map_err(|err| SnapshotShapeError::new(format!("employees[{index}]: {}", err.reason)))?;
        employees.push(employee);
    }

    let editing_employee = match root.get("editingEmployee") {
        None | Some(Value::Null) => None,
        Some(entry) => Some(
            decode_employee(entry)
                .map_err(|err| SnapshotShapeError::new(format!("editingEmployee: {}", err.reason)))?,
        ),
    };

    let loading = root
        .get("loading")
        .and_then(Value::as_bool)
        .ok_or_else(|| SnapshotShapeError::new("`loading` must be a boolean"))?;

    let error = match root.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(_) => {
            return Err(SnapshotShapeError::new("`error` must be null or a string"));
        }
    };

    Ok(AppState {
        employees,
        editing_employee,
        loading,
        error,
    })
}

fn decode_employee(value: &Value) -> Result<Employee, SnapshotShapeError> {
    let entry = value
        .as_object()
        .ok_or_else(|| SnapshotShapeError::new("employee must be a JSON object"))?;

    let field = |name: &str| -> Result<String, SnapshotShapeError> {
        entry
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| SnapshotShapeError::new(format!("`{name}` must be a string")))
    };

    let department_name = field("department")?;
    let department = Department::parse(&department_name)
        .ok_or_else(|| SnapshotShapeError::new(format!("unknown department `{department_name}`")))?;

    let position_name = field("position")?;
    let position = Position::parse(&position_name)
        .ok_or_else(|| SnapshotShapeError::new(format!("unknown position `{position_name}`")))?;

    Ok(Employee {
        id: field("id")?,
        first_name: field("firstName")?,
        last_name: field("lastName")?,
        date_of_employment: field("dateOfEmployment")?,
        date_of_birth: field("dateOfBirth")?,
        phone_number: field("phoneNumber")?,
        email: field("email")?,
        department,
        position,
    })
}
