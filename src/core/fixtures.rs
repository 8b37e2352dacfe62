//! Demo seed data.
//!
//! Every collection is seeded from here at startup and on "Reset demo
//! data". The same cast of employees runs through all five collections so
//! cross-references (badges, names, departments) line up. Attendance,
//! leave and notification dates are derived from the `today`/`now`
//! arguments so the demo always looks current and tests stay
//! deterministic.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::core::attendance::{AttendanceRecord, AttendanceStatus};
use crate::core::document::{Document, DocumentKind, DocumentVersion};
use crate::core::employee::{Employee, EmployeeStatus};
use crate::core::leave::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
use crate::core::notification::{Notification, NotificationKind};

/// The seeded employee roster.
pub fn employees() -> Vec<Employee> {
    let make = |id: &str,
                badge: &str,
                first: &str,
                last: &str,
                phone: &str,
                department: &str,
                position: &str,
                status: EmployeeStatus,
                start: (i32, u32, u32)| Employee {
        id: id.to_string(),
        badge: badge.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@staffscope.io", first.to_lowercase(), last.to_lowercase()),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        status,
        // Seed dates are valid by construction.
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2)
            .unwrap_or_default(),
    };

    vec![
        make(
            "emp-001", "EMP001", "Sarah", "Johnson", "+1 555 0101",
            "Engineering", "Senior Developer", EmployeeStatus::Active, (2021, 3, 15),
        ),
        make(
            "emp-002", "EMP002", "Michael", "Chen", "+1 555 0102",
            "Engineering", "DevOps Engineer", EmployeeStatus::Active, (2022, 7, 1),
        ),
        make(
            "emp-003", "EMP003", "Emily", "Davis", "+1 555 0103",
            "Marketing", "Marketing Manager", EmployeeStatus::Active, (2020, 1, 20),
        ),
        make(
            "emp-004", "EMP004", "James", "Wilson", "+1 555 0104",
            "Sales", "Account Executive", EmployeeStatus::OnLeave, (2021, 11, 8),
        ),
        make(
            "emp-005", "EMP005", "Anna", "Brown", "+1 555 0105",
            "Human Resources", "HR Specialist", EmployeeStatus::Active, (2019, 5, 12),
        ),
        make(
            "emp-006", "EMP006", "David", "Martinez", "+1 555 0106",
            "Finance", "Financial Analyst", EmployeeStatus::Active, (2023, 2, 27),
        ),
        make(
            "emp-007", "EMP007", "Lisa", "Anderson", "+1 555 0107",
            "Design", "UX Designer", EmployeeStatus::Active, (2022, 9, 5),
        ),
        make(
            "emp-008", "EMP008", "Robert", "Taylor", "+1 555 0108",
            "Engineering", "Junior Developer", EmployeeStatus::Terminated, (2023, 6, 19),
        ),
    ]
}

/// Attendance rows for today and the two preceding days.
pub fn attendance(today: NaiveDate) -> Vec<AttendanceRecord> {
    let t = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0);
    let yesterday = today - Duration::days(1);
    let before = today - Duration::days(2);

    let mut next_id = 0u32;
    let mut make = |badge: &str,
                    name: &str,
                    department: &str,
                    date: NaiveDate,
                    clock_in: Option<NaiveTime>,
                    clock_out: Option<NaiveTime>,
                    status: AttendanceStatus,
                    work_hours: Option<f32>,
                    notes: Option<&str>| {
        next_id += 1;
        AttendanceRecord {
            id: format!("att-{next_id:03}"),
            badge: badge.to_string(),
            employee_name: name.to_string(),
            department: department.to_string(),
            date,
            clock_in,
            clock_out,
            status,
            work_hours,
            notes: notes.map(str::to_string),
        }
    };

    vec![
        // Today: shifts still open, no work hours yet.
        make("EMP001", "Sarah Johnson", "Engineering", today, t(9, 2), None,
             AttendanceStatus::Present, None, None),
        make("EMP002", "Michael Chen", "Engineering", today, t(9, 47), None,
             AttendanceStatus::Late, None, Some("Train delay")),
        make("EMP003", "Emily Davis", "Marketing", today, t(8, 55), None,
             AttendanceStatus::Present, None, None),
        make("EMP004", "James Wilson", "Sales", today, None, None,
             AttendanceStatus::OnLeave, None, Some("Approved annual leave")),
        make("EMP005", "Anna Brown", "Human Resources", today, t(8, 58), None,
             AttendanceStatus::Present, None, None),
        make("EMP006", "David Martinez", "Finance", today, None, None,
             AttendanceStatus::Absent, None, None),
        make("EMP007", "Lisa Anderson", "Design", today, t(9, 0), t(13, 0),
             AttendanceStatus::HalfDay, Some(4.0), Some("Dentist appointment")),
        // Yesterday: completed days.
        make("EMP001", "Sarah Johnson", "Engineering", yesterday, t(9, 0), t(17, 30),
             AttendanceStatus::Present, Some(8.5), None),
        make("EMP002", "Michael Chen", "Engineering", yesterday, t(9, 5), t(18, 5),
             AttendanceStatus::Present, Some(9.0), None),
        make("EMP003", "Emily Davis", "Marketing", yesterday, t(9, 40), t(17, 40),
             AttendanceStatus::Late, Some(8.0), None),
        make("EMP004", "James Wilson", "Sales", yesterday, None, None,
             AttendanceStatus::OnLeave, None, Some("Approved annual leave")),
        make("EMP005", "Anna Brown", "Human Resources", yesterday, t(8, 50), t(17, 0),
             AttendanceStatus::Present, Some(8.2), None),
        make("EMP006", "David Martinez", "Finance", yesterday, t(9, 0), t(17, 0),
             AttendanceStatus::Present, Some(8.0), None),
        make("EMP007", "Lisa Anderson", "Design", yesterday, t(9, 10), t(17, 45),
             AttendanceStatus::Present, Some(8.6), None),
        // Two days back, partial coverage.
        make("EMP001", "Sarah Johnson", "Engineering", before, t(9, 1), t(17, 1),
             AttendanceStatus::Present, Some(8.0), None),
        make("EMP002", "Michael Chen", "Engineering", before, None, None,
             AttendanceStatus::Absent, None, Some("Sick day")),
        make("EMP003", "Emily Davis", "Marketing", before, t(8, 45), t(17, 5),
             AttendanceStatus::Present, Some(8.3), None),
    ]
}

/// The seeded leave requests, spanning all three statuses.
pub fn leave_requests(today: NaiveDate) -> Vec<LeaveRequest> {
    let day = |offset: i64| today + Duration::days(offset);
    let make = |id: &str,
                badge: &str,
                name: &str,
                department: &str,
                leave_type: LeaveType,
                start: NaiveDate,
                end: NaiveDate,
                reason: &str,
                status: LeaveStatus,
                applied: NaiveDate,
                review: Option<(&str, NaiveDate)>| LeaveRequest {
        id: id.to_string(),
        badge: badge.to_string(),
        employee_name: name.to_string(),
        department: department.to_string(),
        leave_type,
        start_date: start,
        end_date: end,
        reason: reason.to_string(),
        status,
        applied_on: applied,
        reviewed_by: review.map(|(by, _)| by.to_string()),
        reviewed_on: review.map(|(_, on)| on),
    };

    vec![
        make(
            "lr-001", "EMP001", "Sarah Johnson", "Engineering", LeaveType::Annual,
            day(14), day(16), "Family trip", LeaveStatus::Pending, day(0), None,
        ),
        make(
            "lr-002", "EMP004", "James Wilson", "Sales", LeaveType::Annual,
            day(-2), day(5), "Annual holiday", LeaveStatus::Approved, day(-9),
            Some(("Anna Brown", day(-7))),
        ),
        make(
            "lr-003", "EMP002", "Michael Chen", "Engineering", LeaveType::Sick,
            day(-10), day(-9), "Flu", LeaveStatus::Approved, day(-10),
            Some(("Anna Brown", day(-10))),
        ),
        make(
            "lr-004", "EMP003", "Emily Davis", "Marketing", LeaveType::Personal,
            day(7), day(7), "Moving house", LeaveStatus::Pending, day(-1), None,
        ),
        make(
            "lr-005", "EMP007", "Lisa Anderson", "Design", LeaveType::Personal,
            day(-5), day(-4), "Personal matters", LeaveStatus::Rejected, day(-8),
            Some(("Anna Brown", day(-6))),
        ),
        make(
            "lr-006", "EMP006", "David Martinez", "Finance", LeaveType::Annual,
            day(21), day(25), "Hiking week", LeaveStatus::Approved, day(-3),
            Some(("Anna Brown", day(-2))),
        ),
    ]
}

/// Entitlement snapshot shown on the leave view.
pub fn leave_balance() -> LeaveBalance {
    LeaveBalance {
        annual: 20.0,
        sick: 10.0,
        personal: 5.0,
        used: 8.0,
    }
}

/// The seeded document library.
pub fn documents(today: NaiveDate) -> Vec<Document> {
    let day = |offset: i64| today - Duration::days(offset);
    let version = |v: &str, by: &str, on: NaiveDate, notes: Option<&str>| DocumentVersion {
        version: v.to_string(),
        uploaded_by: by.to_string(),
        uploaded_at: on,
        notes: notes.map(str::to_string),
    };

    vec![
        Document {
            id: "doc-001".into(),
            name: "Employee Handbook".into(),
            kind: DocumentKind::Handbook,
            category: "HR".into(),
            size: "2.4 MB".into(),
            uploaded_by: "Anna Brown".into(),
            uploaded_at: day(300),
            last_modified: day(45),
            departments: vec![],
            description: Some("Company policies, benefits and culture guide".into()),
            current_version: "2.3".into(),
            versions: vec![
                version("2.1", "Anna Brown", day(300), Some("Initial import")),
                version("2.2", "Anna Brown", day(120), Some("Benefits refresh")),
                version("2.3", "Anna Brown", day(45), Some("Remote work section added")),
            ],
        },
        Document {
            id: "doc-002".into(),
            name: "Remote Work Policy".into(),
            kind: DocumentKind::Policy,
            category: "HR".into(),
            size: "340 KB".into(),
            uploaded_by: "Anna Brown".into(),
            uploaded_at: day(90),
            last_modified: day(30),
            departments: vec![],
            description: Some("Eligibility, equipment and home-office rules".into()),
            current_version: "1.1".into(),
            versions: vec![
                version("1.0", "Anna Brown", day(90), Some("First published version")),
                version("1.1", "Anna Brown", day(30), Some("Clarified core hours")),
            ],
        },
        Document {
            id: "doc-003".into(),
            name: "Expense Claim Form".into(),
            kind: DocumentKind::Form,
            category: "Finance".into(),
            size: "120 KB".into(),
            uploaded_by: "David Martinez".into(),
            uploaded_at: day(200),
            last_modified: day(200),
            departments: vec![],
            description: Some("Monthly expense reimbursement form".into()),
            current_version: "1.0".into(),
            versions: vec![version("1.0", "David Martinez", day(200), None)],
        },
        Document {
            id: "doc-004".into(),
            name: "Quarterly All-Hands Summary".into(),
            kind: DocumentKind::Announcement,
            category: "General".into(),
            size: "1.1 MB".into(),
            uploaded_by: "Emily Davis".into(),
            uploaded_at: day(12),
            last_modified: day(12),
            departments: vec![],
            description: Some("Slides and notes from the quarterly all-hands".into()),
            current_version: "1.0".into(),
            versions: vec![version("1.0", "Emily Davis", day(12), None)],
        },
        Document {
            id: "doc-005".into(),
            name: "Security Awareness Training".into(),
            kind: DocumentKind::Training,
            category: "IT".into(),
            size: "5.6 MB".into(),
            uploaded_by: "Michael Chen".into(),
            uploaded_at: day(60),
            last_modified: day(20),
            departments: vec!["Engineering".into()],
            description: Some("Mandatory annual security training deck".into()),
            current_version: "3.1".into(),
            versions: vec![
                version("3.0", "Michael Chen", day(60), Some("New phishing module")),
                version("3.1", "Michael Chen", day(20), Some("Fixed quiz answers")),
            ],
        },
        Document {
            id: "doc-006".into(),
            name: "Sales Playbook".into(),
            kind: DocumentKind::Handbook,
            category: "Sales".into(),
            size: "3.2 MB".into(),
            uploaded_by: "James Wilson".into(),
            uploaded_at: day(150),
            last_modified: day(75),
            departments: vec!["Sales".into()],
            description: Some("Prospecting scripts and pricing guidance".into()),
            current_version: "1.4".into(),
            versions: vec![
                version("1.3", "James Wilson", day(150), None),
                version("1.4", "James Wilson", day(75), Some("Updated price list")),
            ],
        },
        Document {
            id: "doc-007".into(),
            name: "Public Holiday Schedule".into(),
            kind: DocumentKind::Announcement,
            category: "General".into(),
            size: "85 KB".into(),
            uploaded_by: "Anna Brown".into(),
            uploaded_at: day(400),
            last_modified: day(40),
            departments: vec![],
            description: None,
            current_version: "1.1".into(),
            versions: vec![
                version("1.0", "Anna Brown", day(400), None),
                version("1.1", "Anna Brown", day(40), Some("Added bridge days")),
            ],
        },
    ]
}

/// The seeded notification feed, newest first.
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let ago = |minutes: i64| now - Duration::minutes(minutes);
    let make = |id: &str,
                kind: NotificationKind,
                title: &str,
                message: &str,
                timestamp: DateTime<Utc>,
                read: bool| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp,
        read,
    };

    vec![
        make(
            "ntf-001", NotificationKind::Leave, "Leave Request",
            "Sarah Johnson requested 3 days of annual leave", ago(5), false,
        ),
        make(
            "ntf-002", NotificationKind::Attendance, "Late Arrival",
            "Michael Chen clocked in 47 minutes late", ago(25), false,
        ),
        make(
            "ntf-003", NotificationKind::Approval, "Request Approved",
            "Your expense claim for last month was approved", ago(2 * 60), true,
        ),
        make(
            "ntf-004", NotificationKind::System, "Scheduled Maintenance",
            "StaffScope will be briefly unavailable on Sunday at 02:00", ago(4 * 60), false,
        ),
        make(
            "ntf-005", NotificationKind::Leave, "Leave Approved",
            "James Wilson's annual leave was approved by Anna Brown", ago(24 * 60), true,
        ),
        make(
            "ntf-006", NotificationKind::Alert, "Certification Expiring",
            "Security Awareness Training certification expires in 14 days",
            ago(26 * 60), false,
        ),
        make(
            "ntf-007", NotificationKind::Attendance, "Absence Recorded",
            "David Martinez was marked absent yesterday", ago(2 * 24 * 60), true,
        ),
        make(
            "ntf-008", NotificationKind::System, "New Version Published",
            "Employee Handbook v2.3 is now available", ago(3 * 24 * 60), true,
        ),
        make(
            "ntf-009", NotificationKind::Leave, "Leave Rejected",
            "Lisa Anderson's personal leave request was rejected", ago(4 * 24 * 60), true,
        ),
        make(
            "ntf-010", NotificationKind::Alert, "Probation Review Due",
            "Probation review for Robert Taylor is overdue", ago(6 * 24 * 60), true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<T>(items: &[T], id: impl Fn(&T) -> &str) {
        let ids: HashSet<&str> = items.iter().map(|item| id(item)).collect();
        assert_eq!(ids.len(), items.len(), "duplicate ids in seed data");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_unique_ids(&employees(), |e| &e.id);
        assert_unique_ids(&attendance(today), |a| &a.id);
        assert_unique_ids(&leave_requests(today), |l| &l.id);
        assert_unique_ids(&documents(today), |d| &d.id);
        assert_unique_ids(&notifications(Utc::now()), |n| &n.id);
    }

    #[test]
    fn test_cast_is_consistent() {
        let roster = employees();
        let badges: HashSet<&str> = roster.iter().map(|e| e.badge.as_str()).collect();
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        for a in attendance(today) {
            assert!(badges.contains(a.badge.as_str()), "unknown badge {}", a.badge);
        }
        for l in leave_requests(today) {
            assert!(badges.contains(l.badge.as_str()), "unknown badge {}", l.badge);
        }
    }

    #[test]
    fn test_attendance_covers_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let rows = attendance(today);
        assert!(rows.iter().any(|r| r.date == today));
        // Open shifts today have no work hours yet.
        assert!(rows
            .iter()
            .filter(|r| r.date == today && r.clock_out.is_none())
            .all(|r| r.work_hours.is_none()));
    }

    #[test]
    fn test_notification_feed_is_newest_first_with_unread() {
        let now = Utc::now();
        let feed = notifications(now);
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert!(feed.iter().any(|n| !n.read));
        assert!(feed.iter().any(|n| n.read));
    }
}
