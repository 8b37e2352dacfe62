//! Canonical data structure for an employee record.
//!
//! Employees are the anchor of the workspace: attendance rows, leave
//! requests and document audiences all reference them by badge or name.

use chrono::NaiveDate;
use std::collections::HashSet;

/// Employment status. A closed set: adding a variant forces every `match`
/// over it to be revisited, which is exactly what a new status requires
/// (table badges, stat cards, filter combos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    /// Every status, in display order. Used by filter combos and stat cards
    /// so zero-count categories still show up.
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Terminated,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

/// Represents a single employee.
///
/// The struct is `Clone` (for UI dialogs editing a copy) and
/// `serde::Serialize` (for export).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Employee {
    /// Stable record id. Seeded records carry readable ids; records created
    /// at runtime get a fresh UUID.
    pub id: String,

    /// Company badge number shown to users, e.g. `"EMP001"`.
    pub badge: String,

    pub first_name: String,
    pub last_name: String,

    /// Work email address.
    pub email: String,

    /// Contact phone number, free-form.
    pub phone: String,

    /// Department name, e.g. `"Engineering"`.
    pub department: String,

    /// Job title, e.g. `"Senior Developer"`.
    pub position: String,

    pub status: EmployeeStatus,

    /// First day of employment.
    pub start_date: NaiveDate,
}

impl Employee {
    /// First and last name joined with a space, as shown in tables and
    /// matched by the search box.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Up-to-two-letter initials for the avatar badge, e.g. `"SJ"`.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        for name in [&self.first_name, &self.last_name] {
            if let Some(c) = name.chars().next() {
                out.extend(c.to_uppercase());
            }
        }
        out
    }
}

/// Headline counts for the employees view.
///
/// Every status gets its own field so a zero count is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub terminated: usize,
    /// Number of distinct department names across all employees.
    pub departments: usize,
}

impl EmployeeStats {
    /// Compute stats over the full (unfiltered) employee list.
    pub fn compute(employees: &[Employee]) -> Self {
        let mut stats = EmployeeStats {
            total: employees.len(),
            active: 0,
            on_leave: 0,
            terminated: 0,
            departments: 0,
        };
        let mut departments = HashSet::new();
        for e in employees {
            match e.status {
                EmployeeStatus::Active => stats.active += 1,
                EmployeeStatus::OnLeave => stats.on_leave += 1,
                EmployeeStatus::Terminated => stats.terminated += 1,
            }
            departments.insert(e.department.as_str());
        }
        stats.departments = departments.len();
        stats
    }
}

/// Sorted list of distinct department names, for filter combos.
pub fn department_names(employees: &[Employee]) -> Vec<String> {
    let mut names: Vec<String> = employees
        .iter()
        .map(|e| e.department.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(first: &str, last: &str, dept: &str, status: EmployeeStatus) -> Employee {
        Employee {
            id: format!("emp-{first}"),
            badge: "EMP001".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{first}@staffscope.io").to_lowercase(),
            phone: "+1 555 0100".into(),
            department: dept.into(),
            position: "Engineer".into(),
            status,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_full_name_and_initials() {
        let e = make_employee("Sarah", "Johnson", "Engineering", EmployeeStatus::Active);
        assert_eq!(e.full_name(), "Sarah Johnson");
        assert_eq!(e.initials(), "SJ");
    }

    #[test]
    fn test_stats_report_zero_counts() {
        let list = vec![
            make_employee("Sarah", "Johnson", "Engineering", EmployeeStatus::Active),
            make_employee("James", "Wilson", "Sales", EmployeeStatus::OnLeave),
        ];
        let stats = EmployeeStats::compute(&list);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.on_leave, 1);
        // No terminated employees, but the count is still present.
        assert_eq!(stats.terminated, 0);
        assert_eq!(stats.departments, 2);
    }

    #[test]
    fn test_department_names_sorted_distinct() {
        let list = vec![
            make_employee("A", "A", "Sales", EmployeeStatus::Active),
            make_employee("B", "B", "Engineering", EmployeeStatus::Active),
            make_employee("C", "C", "Sales", EmployeeStatus::Active),
        ];
        assert_eq!(department_names(&list), vec!["Engineering", "Sales"]);
    }
}
