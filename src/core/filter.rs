//! In-memory filtering logic for StaffScope.
//!
//! One filter struct per record collection. Every field defaults to
//! "pass all", a record matches only if it satisfies **every** active
//! criterion, and checks are ordered cheapest-first for short-circuit
//! efficiency. Text searches are case-insensitive substring matches
//! against a cached lowercase copy of the query.
//!
//! The single "match everything" sentinel throughout is `Option::None`;
//! combo boxes render the `None` arm as "All ...".

use crate::core::attendance::{AttendanceRecord, AttendanceStatus};
use crate::core::document::{Document, DocumentKind};
use crate::core::employee::{Employee, EmployeeStatus};
use crate::core::leave::{LeaveRequest, LeaveStatus};
use crate::core::notification::{Notification, NotificationKind};

// ── Employees ───────────────────────────────────────────────────────────

/// Filter criteria for the employees table.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Free-form search — matched against full name, email and badge.
    pub search: String,

    /// Pre-computed lowercase version of `search` for efficient
    /// case-insensitive matching. Updated by [`update_search_cache`].
    ///
    /// [`update_search_cache`]: EmployeeFilter::update_search_cache
    pub search_lower: String,

    /// Department to show. `None` = all departments.
    pub department: Option<String>,

    /// Status to show. `None` = all statuses.
    pub status: Option<EmployeeStatus>,
}

impl EmployeeFilter {
    /// Refresh the cached lowercase search string. Call after modifying
    /// `search`.
    pub fn update_search_cache(&mut self) {
        self.search_lower = self.search.to_lowercase();
    }

    /// Test whether the employee matches **all** active criteria.
    ///
    /// Checks are ordered cheapest-first:
    /// 1. Status (enum compare)
    /// 2. Department (string compare)
    /// 3. Search (substring over three fields)
    pub fn matches(&self, e: &Employee) -> bool {
        if let Some(status) = self.status {
            if e.status != status {
                return false;
            }
        }

        if let Some(ref dept) = self.department {
            if &e.department != dept {
                return false;
            }
        }

        if !self.search_lower.is_empty() {
            let q = self.search_lower.as_str();
            let name_hit = e.full_name().to_lowercase().contains(q);
            if !name_hit
                && !e.email.to_lowercase().contains(q)
                && !e.badge.to_lowercase().contains(q)
            {
                return false;
            }
        }

        true
    }

    /// Returns `true` if all criteria are at their default (pass-all) state.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.department.is_none() && self.status.is_none()
    }

    /// Reset all criteria to their default (pass-all) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Documents ───────────────────────────────────────────────────────────

/// Filter criteria for the documents table.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Free-form search — matched against name, description and uploader.
    pub search: String,

    /// Cached lowercase copy of `search`.
    pub search_lower: String,

    /// Kind to show. `None` = all kinds.
    pub kind: Option<DocumentKind>,

    /// Category to show. `None` = all categories.
    pub category: Option<String>,
}

impl DocumentFilter {
    pub fn update_search_cache(&mut self) {
        self.search_lower = self.search.to_lowercase();
    }

    /// Test whether the document matches **all** active criteria.
    pub fn matches(&self, d: &Document) -> bool {
        if let Some(kind) = self.kind {
            if d.kind != kind {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if &d.category != category {
                return false;
            }
        }

        if !self.search_lower.is_empty() {
            let q = self.search_lower.as_str();
            let desc_hit = d
                .description
                .as_deref()
                .is_some_and(|desc| desc.to_lowercase().contains(q));
            if !d.name.to_lowercase().contains(q)
                && !desc_hit
                && !d.uploaded_by.to_lowercase().contains(q)
            {
                return false;
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.kind.is_none() && self.category.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Attendance ──────────────────────────────────────────────────────────

/// Filter criteria for the attendance table.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    /// Free-form search — matched against employee name and badge.
    pub search: String,

    /// Cached lowercase copy of `search`.
    pub search_lower: String,

    /// Status to show. `None` = all statuses.
    pub status: Option<AttendanceStatus>,

    /// Department to show. `None` = all departments.
    pub department: Option<String>,

    /// Raw text from the date input field (`YYYY-MM-DD`).
    pub date_input: String,

    /// Parsed calendar day (computed from `date_input`). `None` = any day.
    /// Rows match on exact calendar-day equality.
    pub date: Option<chrono::NaiveDate>,
}

impl AttendanceFilter {
    pub fn update_search_cache(&mut self) {
        self.search_lower = self.search.to_lowercase();
    }

    /// Re-parse the date input into `date`. Call whenever the input field
    /// changes; malformed input clears the day constraint.
    pub fn parse_date(&mut self) {
        self.date = crate::util::time::parse_date_input(&self.date_input);
    }

    /// Test whether the record matches **all** active criteria.
    pub fn matches(&self, r: &AttendanceRecord) -> bool {
        if let Some(status) = self.status {
            if r.status != status {
                return false;
            }
        }

        if let Some(day) = self.date {
            if r.date != day {
                return false;
            }
        }

        if let Some(ref dept) = self.department {
            if &r.department != dept {
                return false;
            }
        }

        if !self.search_lower.is_empty() {
            let q = self.search_lower.as_str();
            if !r.employee_name.to_lowercase().contains(q) && !r.badge.to_lowercase().contains(q) {
                return false;
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.status.is_none()
            && self.department.is_none()
            && self.date.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Leave ───────────────────────────────────────────────────────────────

/// Filter criteria for the leave table. Driven by the status tab strip;
/// `None` is the "All" tab.
#[derive(Debug, Clone, Default)]
pub struct LeaveFilter {
    pub status: Option<LeaveStatus>,
}

impl LeaveFilter {
    pub fn matches(&self, r: &LeaveRequest) -> bool {
        match self.status {
            Some(status) => r.status == status,
            None => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Notifications ───────────────────────────────────────────────────────

/// Read-status constraint for the notification list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ReadFilter {
    pub const ALL: [ReadFilter; 3] = [ReadFilter::All, ReadFilter::Unread, ReadFilter::Read];

    pub fn label(self) -> &'static str {
        match self {
            ReadFilter::All => "All",
            ReadFilter::Unread => "Unread",
            ReadFilter::Read => "Read",
        }
    }
}

/// Filter criteria for the notification list.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    /// Kind to show. `None` = all kinds.
    pub kind: Option<NotificationKind>,

    /// Read-status constraint.
    pub read: ReadFilter,
}

impl NotificationFilter {
    pub fn matches(&self, n: &Notification) -> bool {
        if let Some(kind) = self.kind {
            if n.kind != kind {
                return false;
            }
        }

        match self.read {
            ReadFilter::All => true,
            ReadFilter::Unread => !n.read,
            ReadFilter::Read => n.read,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.read == ReadFilter::All
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn make_employee(first: &str, last: &str, email: &str, badge: &str) -> Employee {
        Employee {
            id: format!("emp-{badge}"),
            badge: badge.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: "+1 555 0100".into(),
            department: "Engineering".into(),
            position: "Developer".into(),
            status: EmployeeStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        }
    }

    fn make_attendance(name: &str, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("att-{name}-{date}"),
            badge: "EMP001".into(),
            employee_name: name.into(),
            department: "Engineering".into(),
            date,
            clock_in: None,
            clock_out: None,
            status: AttendanceStatus::Present,
            work_hours: None,
            notes: None,
        }
    }

    #[test]
    fn test_default_employee_filter_matches_all() {
        let f = EmployeeFilter::default();
        let e = make_employee("Sarah", "Johnson", "sarah.johnson@staffscope.io", "EMP001");
        assert!(f.matches(&e));
        assert!(f.is_empty());
    }

    #[test]
    fn test_employee_search_hits_any_field() {
        let e = make_employee("Sarah", "Johnson", "sarah.johnson@staffscope.io", "EMP001");
        let mut f = EmployeeFilter::default();

        // Partial name, any case.
        for q in ["sar", "SAR", "Sarah J", "johnson"] {
            f.search = q.into();
            f.update_search_cache();
            assert!(f.matches(&e), "query {q:?} should match");
        }

        // Email and badge.
        f.search = "staffscope.io".into();
        f.update_search_cache();
        assert!(f.matches(&e));
        f.search = "emp001".into();
        f.update_search_cache();
        assert!(f.matches(&e));

        f.search = "nobody".into();
        f.update_search_cache();
        assert!(!f.matches(&e));
    }

    #[test]
    fn test_employee_criteria_combine_with_and() {
        let e = make_employee("Sarah", "Johnson", "sarah@staffscope.io", "EMP001");
        let mut f = EmployeeFilter {
            search: "sarah".into(),
            department: Some("Engineering".into()),
            status: Some(EmployeeStatus::Active),
            ..Default::default()
        };
        f.update_search_cache();
        assert!(f.matches(&e));

        // One failing criterion vetoes the match.
        f.department = Some("Sales".into());
        assert!(!f.matches(&e));
    }

    #[test]
    fn test_employee_filter_clear_resets_to_pass_all() {
        let mut f = EmployeeFilter {
            search: "x".into(),
            status: Some(EmployeeStatus::Terminated),
            ..Default::default()
        };
        f.update_search_cache();
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
        assert!(f.matches(&make_employee("A", "B", "a@b.io", "EMP009")));
    }

    #[test]
    fn test_attendance_date_filter_exact_day() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        let mut f = AttendanceFilter {
            date_input: "2025-01-15".into(),
            ..Default::default()
        };
        f.parse_date();

        assert!(f.matches(&make_attendance("Sarah Johnson", day)));
        assert!(!f.matches(&make_attendance("Sarah Johnson", other)));

        // Malformed input clears the constraint.
        f.date_input = "last tuesday".into();
        f.parse_date();
        assert!(f.matches(&make_attendance("Sarah Johnson", other)));
    }

    #[test]
    fn test_leave_filter_tabs() {
        let mut r = LeaveRequest {
            id: "lr-1".into(),
            badge: "EMP001".into(),
            employee_name: "Sarah Johnson".into(),
            department: "Engineering".into(),
            leave_type: crate::core::leave::LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            reason: "holiday".into(),
            status: LeaveStatus::Pending,
            applied_on: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            reviewed_by: None,
            reviewed_on: None,
        };

        let all = LeaveFilter::default();
        let pending = LeaveFilter {
            status: Some(LeaveStatus::Pending),
        };
        assert!(all.matches(&r));
        assert!(pending.matches(&r));

        r.status = LeaveStatus::Approved;
        assert!(all.matches(&r));
        assert!(!pending.matches(&r));
    }

    #[test]
    fn test_notification_filter() {
        let n = Notification {
            id: "n-1".into(),
            kind: NotificationKind::Leave,
            title: "Leave Request".into(),
            message: "Sarah Johnson requested 3 days of annual leave".into(),
            timestamp: Utc::now(),
            read: false,
        };

        let mut f = NotificationFilter::default();
        assert!(f.matches(&n));

        f.read = ReadFilter::Unread;
        assert!(f.matches(&n));
        f.read = ReadFilter::Read;
        assert!(!f.matches(&n));

        f.read = ReadFilter::All;
        f.kind = Some(NotificationKind::System);
        assert!(!f.matches(&n));
    }
}
