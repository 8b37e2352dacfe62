//! Leave requests, leave balances and their headline stats.

use chrono::NaiveDate;

/// Category of leave. Closed set used by the request form combo and the
/// type badge in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
    Paternity,
    Unpaid,
}

impl LeaveType {
    /// Every type, in display order.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Unpaid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Personal => "Personal",
            LeaveType::Maternity => "Maternity",
            LeaveType::Paternity => "Paternity",
            LeaveType::Unpaid => "Unpaid",
        }
    }
}

/// Review status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// A single leave request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LeaveRequest {
    pub id: String,

    /// Badge of the requesting employee.
    pub badge: String,

    /// Requesting employee's display name, denormalised for the table.
    pub employee_name: String,

    pub department: String,

    pub leave_type: LeaveType,

    /// First day of leave.
    pub start_date: NaiveDate,

    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,

    /// Free-form justification from the request form.
    pub reason: String,

    pub status: LeaveStatus,

    /// Day the request was submitted.
    pub applied_on: NaiveDate,

    /// Reviewer name, set when the request is approved or rejected.
    pub reviewed_by: Option<String>,

    /// Day of the review decision.
    pub reviewed_on: Option<NaiveDate>,
}

impl LeaveRequest {
    /// Number of days requested, counting both endpoints.
    ///
    /// A request from 2025-01-10 to 2025-01-15 is 6 days; a single-day
    /// request is 1 day.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether `day` falls inside the leave span. Drives the calendar
    /// highlighting on the leave view.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Per-employee leave entitlement snapshot.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct LeaveBalance {
    /// Annual leave days granted per year.
    pub annual: f32,
    /// Sick leave days granted per year.
    pub sick: f32,
    /// Personal days granted per year.
    pub personal: f32,
    /// Days consumed so far this year.
    pub used: f32,
}

impl LeaveBalance {
    /// Days still available across all categories.
    pub fn remaining(&self) -> f32 {
        (self.annual + self.sick + self.personal - self.used).max(0.0)
    }
}

/// Headline counts for the leave view. One field per status, so zero
/// counts are still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveStats {
    pub fn compute(requests: &[LeaveRequest]) -> Self {
        let mut stats = LeaveStats {
            pending: 0,
            approved: 0,
            rejected: 0,
        };
        for r in requests {
            match r.status {
                LeaveStatus::Pending => stats.pending += 1,
                LeaveStatus::Approved => stats.approved += 1,
                LeaveStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(start: (i32, u32, u32), end: (i32, u32, u32)) -> LeaveRequest {
        LeaveRequest {
            id: "lr-1".into(),
            badge: "EMP001".into(),
            employee_name: "Sarah Johnson".into(),
            department: "Engineering".into(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            reason: "Family holiday".into(),
            status: LeaveStatus::Pending,
            applied_on: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            reviewed_by: None,
            reviewed_on: None,
        }
    }

    #[test]
    fn test_duration_counts_both_endpoints() {
        let r = make_request((2025, 1, 10), (2025, 1, 15));
        assert_eq!(r.duration_days(), 6);
    }

    #[test]
    fn test_single_day_duration() {
        let r = make_request((2025, 1, 10), (2025, 1, 10));
        assert_eq!(r.duration_days(), 1);
    }

    #[test]
    fn test_covers_is_inclusive() {
        let r = make_request((2025, 1, 10), (2025, 1, 15));
        assert!(r.covers(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert!(r.covers(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!r.covers(NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()));
    }

    #[test]
    fn test_stats_zero_counts_present() {
        let stats = LeaveStats::compute(&[make_request((2025, 1, 10), (2025, 1, 12))]);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 0);
        assert_eq!(stats.rejected, 0);
    }

    #[test]
    fn test_balance_remaining() {
        let b = LeaveBalance {
            annual: 20.0,
            sick: 10.0,
            personal: 5.0,
            used: 8.0,
        };
        assert_eq!(b.remaining(), 27.0);
    }
}
