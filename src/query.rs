//! Employee list querying.
//!
//! [`QueryEngine`] owns a single live [`QueryCriteria`] record and
//! produces filtered, sorted views of an employee collection from it.
//! The source collection is never mutated; results are cloned rows.

use crate::models::Employee;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Which employees to keep by activity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn keeps(self, employee: &Employee) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => employee.status,
            StatusFilter::Inactive => !employee.status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    /// Unknown values mean "no status filter".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        })
    }
}

/// The column a list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Email,
    Department,
    JoinDate,
}

impl SortField {
    fn key(self, employee: &Employee) -> &str {
        match self {
            SortField::Name => &employee.name,
            SortField::Email => &employee.email,
            SortField::Department => &employee.department,
            SortField::JoinDate => &employee.join_date,
        }
    }
}

impl FromStr for SortField {
    type Err = std::convert::Infallible;

    /// Unknown fields fall back to sorting by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "email" => SortField::Email,
            "department" => SortField::Department,
            "joindate" | "join_date" => SortField::JoinDate,
            _ => SortField::Name,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "desc" | "descending" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        })
    }
}

/// Live list criteria.  `Default` is the cleared state: empty search,
/// no department, all statuses, sorted by name ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    pub search_text: String,
    pub department_filter: String,
    pub status_filter: StatusFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

/// Filters, searches and sorts employee collections.
///
/// The criteria are mutated only through the setters below and every
/// change is visible to the next [`QueryEngine::filter_and_sort`] call.
/// The engine is meant to be owned by a single consumer; callers that
/// share one across threads must wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    criteria: QueryCriteria,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: QueryCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.criteria.department_filter = department.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.criteria.status_filter = status;
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.criteria.sort_field = field;
        self.criteria.sort_order = order;
    }

    /// Flips the order for the current sort field.
    pub fn toggle_sort_order(&mut self) {
        self.criteria.sort_order = self.criteria.sort_order.flipped();
    }

    /// Restores all five criteria to their defaults.
    pub fn clear(&mut self) {
        self.criteria = QueryCriteria::default();
    }

    /// True when any filter narrows the list.  Sort settings never count.
    pub fn has_active_filters(&self) -> bool {
        !self.criteria.search_text.is_empty()
            || !self.criteria.department_filter.is_empty()
            || self.criteria.status_filter != StatusFilter::All
    }

    /// Applies search, department and status filters (all must match),
    /// then a stable sort on the configured field.
    pub fn filter_and_sort(&self, employees: &[Employee]) -> Vec<Employee> {
        if employees.is_empty() {
            return Vec::new();
        }

        let query = self.criteria.search_text.trim().to_lowercase();
        let department = self.criteria.department_filter.to_lowercase();
        let status = self.criteria.status_filter;

        let mut rows: Vec<Employee> = employees
            .iter()
            .filter(|e| query.is_empty() || matches_search(e, &query))
            .filter(|e| department.is_empty() || e.department.to_lowercase() == department)
            .filter(|e| status.keeps(e))
            .cloned()
            .collect();

        let field = self.criteria.sort_field;
        let order = self.criteria.sort_order;
        // `sort_by` is stable; descending reverses the comparator so
        // equal keys keep their input order either way.
        rows.sort_by(|a, b| {
            let ord = locale_compare(field.key(a), field.key(b));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });

        debug!(
            input = employees.len(),
            output = rows.len(),
            ?field,
            ?order,
            "filtered employee list"
        );
        rows
    }

    /// Returns the "load more" window of a filtered list: the first
    /// `page * page_size` rows.  `page` is 1-based; 0 is treated as 1.
    pub fn page(rows: &[Employee], page: usize, page_size: usize) -> Page {
        let shown = page.max(1).saturating_mul(page_size).min(rows.len());
        Page {
            employees: rows[..shown].to_vec(),
            has_more: shown < rows.len(),
        }
    }
}

/// A prefix of a filtered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub employees: Vec<Employee>,
    pub has_more: bool,
}

fn matches_search(employee: &Employee, query: &str) -> bool {
    [
        &employee.name,
        &employee.email,
        &employee.department,
        &employee.designation,
        &employee.work_location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Approximates an English locale collation in three levels: base
/// letters (accents and case ignored), then accents (unaccented first),
/// then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<char>>()
    };
    let primary = base(a).cmp(&base(b));
    if primary != Ordering::Equal {
        return primary;
    }
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<char>>();
    let secondary = accented(a).cmp(&accented(b));
    if secondary != Ordering::Equal {
        return secondary;
    }
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.len().cmp(&b.len())
}

/// Distinct non-blank departments, sorted ascending.
pub fn unique_departments(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.department.as_str())
        .filter(|d| !d.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Head counts for the list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl EmployeeStats {
    pub fn of(employees: &[Employee]) -> Self {
        let active = employees.iter().filter(|e| e.is_active()).count();
        Self {
            total: employees.len(),
            active,
            inactive: employees.len() - active,
        }
    }
}
