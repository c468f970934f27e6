//! Employee draft validation rules.
//!
//! # Responsibility
//! - Evaluate the per-field rule set against a draft and the current
//!   roster.
//! - Report at most one error per field; the first failing rule wins.
//!
//! # Invariants
//! - Email uniqueness is case-insensitive and excludes the record being
//!   edited, matched by id.
//! - The canonical phone rule is the pattern form: optional leading `+`,
//!   then digits, spaces and hyphens, 10-15 characters total.

use crate::model::employee::{Employee, EmployeeId};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s'-]{2,50}$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s-]{10,15}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const MINIMUM_AGE_YEARS: i32 = 18;
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated fields of an employee draft, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    PhoneNumber,
    Email,
}

impl EmployeeField {
    /// Wire/form name of the field (`firstName`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a draft is submitted as a new record or as an edit of an
/// existing one. Edit mode carries the id whose stored email must be
/// excluded from the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit { editing_id: EmployeeId },
}

/// Field-keyed validation error messages. Empty means the draft may be
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<EmployeeField, String>,
}

impl ValidationErrors {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for one field, if any.
    pub fn message(&self, field: EmployeeField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterates errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: EmployeeField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Validates a draft against the roster using the current local date.
pub fn validate(draft: &Employee, roster: &[Employee], mode: &SubmitMode) -> ValidationErrors {
    validate_at(draft, roster, mode, Local::now().date_naive())
}

/// Validates a draft against the roster for a fixed "today".
///
/// Deterministic given its inputs; `validate` is this with the wall
/// clock plugged in.
pub fn validate_at(
    draft: &Employee,
    roster: &[Employee],
    mode: &SubmitMode,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    check_name(
        &mut errors,
        EmployeeField::FirstName,
        "First name",
        &draft.first_name,
    );
    check_name(
        &mut errors,
        EmployeeField::LastName,
        "Last name",
        &draft.last_name,
    );
    check_date_of_employment(&mut errors, &draft.date_of_employment, today);
    check_date_of_birth(&mut errors, &draft.date_of_birth, today);
    check_phone_number(&mut errors, &draft.phone_number);
    check_email(&mut errors, draft, roster, mode);

    errors
}

fn check_name(errors: &mut ValidationErrors, field: EmployeeField, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{label} is required"));
    } else if !NAME_RE.is_match(value) {
        errors.insert(
            field,
            format!(
                "{label} should only contain letters, spaces, hyphens, and apostrophes (2-50 characters)"
            ),
        );
    }
}

fn check_date_of_employment(errors: &mut ValidationErrors, value: &str, today: NaiveDate) {
    match parse_iso_date(value) {
        DateInput::Empty => {
            errors.insert(
                EmployeeField::DateOfEmployment,
                "Date of employment is required",
            );
        }
        DateInput::Invalid => {
            errors.insert(EmployeeField::DateOfEmployment, "Please enter a valid date");
        }
        DateInput::Parsed(date) if date > today => {
            errors.insert(
                EmployeeField::DateOfEmployment,
                "Date of employment cannot be in the future",
            );
        }
        DateInput::Parsed(_) => {}
    }
}

fn check_date_of_birth(errors: &mut ValidationErrors, value: &str, today: NaiveDate) {
    match parse_iso_date(value) {
        DateInput::Empty => {
            errors.insert(EmployeeField::DateOfBirth, "Date of birth is required");
        }
        DateInput::Invalid => {
            errors.insert(EmployeeField::DateOfBirth, "Please enter a valid date");
        }
        DateInput::Parsed(date) if date > today => {
            errors.insert(
                EmployeeField::DateOfBirth,
                "Date of birth cannot be in the future",
            );
        }
        DateInput::Parsed(date) => {
            // Age by year subtraction only, not adjusted for month/day.
            if today.year() - date.year() < MINIMUM_AGE_YEARS {
                errors.insert(
                    EmployeeField::DateOfBirth,
                    "Employee must be at least 18 years old",
                );
            }
        }
    }
}

fn check_phone_number(errors: &mut ValidationErrors, value: &str) {
    if value.trim().is_empty() {
        errors.insert(EmployeeField::PhoneNumber, "Phone number is required");
    } else if !PHONE_RE.is_match(value) {
        errors.insert(
            EmployeeField::PhoneNumber,
            "Please enter a valid phone number (10-15 digits)",
        );
    }
}

fn check_email(
    errors: &mut ValidationErrors,
    draft: &Employee,
    roster: &[Employee],
    mode: &SubmitMode,
) {
    if draft.email.trim().is_empty() {
        errors.insert(EmployeeField::Email, "Email is required");
        return;
    }
    if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(EmployeeField::Email, "Please enter a valid email address");
        return;
    }

    let candidate = draft.email.to_lowercase();
    let taken = roster.iter().any(|existing| {
        if let SubmitMode::Edit { editing_id } = mode {
            if &existing.id == editing_id {
                return false;
            }
        }
        existing.email.to_lowercase() == candidate
    });
    if taken {
        errors.insert(
            EmployeeField::Email,
            "This email address is already registered in the system",
        );
    }
}

enum DateInput {
    Empty,
    Invalid,
    Parsed(NaiveDate),
}

fn parse_iso_date(value: &str) -> DateInput {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DateInput::Empty;
    }
    match NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        Ok(date) => DateInput::Parsed(date),
        Err(_) => DateInput::Invalid,
    }
}
