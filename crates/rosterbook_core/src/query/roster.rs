//! Roster search and pagination.
//!
//! # Responsibility
//! - Match employees against a free-text search across name, email,
//!   department and position.
//! - Slice the filtered roster into stable pages.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment.
//! - The requested page is clamped into the valid range; page numbering
//!   is 1-based.

use crate::model::employee::Employee;

/// Page size used by the list view when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter and paging options for a roster listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterQuery {
    /// Free-text filter; `None` or blank matches everything.
    pub search: Option<String>,
    /// 1-based page to return.
    pub page: usize,
    pub page_size: usize,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a filtered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPage {
    pub employees: Vec<Employee>,
    /// Effective 1-based page after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Number of records matching the search, across all pages.
    pub total_matches: usize,
}

/// Filters the roster by the query's search text and returns the
/// requested page.
pub fn query_roster(roster: &[Employee], query: &RosterQuery) -> RosterPage {
    let matches: Vec<&Employee> = match normalized_search(query) {
        Some(needle) => roster
            .iter()
            .filter(|employee| matches_search(employee, &needle))
            .collect(),
        None => roster.iter().collect(),
    };

    let total_matches = matches.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_matches.div_ceil(page_size);
    let page = query.page.clamp(1, total_pages.max(1));

    let employees = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    RosterPage {
        employees,
        page,
        total_pages,
        total_matches,
    }
}

fn normalized_search(query: &RosterQuery) -> Option<String> {
    let needle = query.search.as_deref()?.trim().to_lowercase();
    if needle.is_empty() {
        None
    } else {
        Some(needle)
    }
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    employee.first_name.to_lowercase().contains(needle)
        || employee.last_name.to_lowercase().contains(needle)
        || employee.email.to_lowercase().contains(needle)
        || employee.department.as_str().to_lowercase().contains(needle)
        || employee.position.as_str().to_lowercase().contains(needle)
}
