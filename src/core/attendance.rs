//! Attendance records and the clock-in/out card state.
//!
//! One [`AttendanceRecord`] per employee per working day. The clock card on
//! the attendance view is driven by [`ClockStatus`], a plain value whose
//! transitions are pure functions of the current time so they can be tested
//! without a running UI.

use chrono::{NaiveDate, NaiveTime};

/// Attendance outcome for one employee-day. Closed set; every `match` over
/// it must handle all five outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    OnLeave,
}

impl AttendanceStatus {
    /// Every status, in display order.
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
        AttendanceStatus::OnLeave,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::OnLeave => "On Leave",
        }
    }
}

/// One employee's attendance for one calendar day.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AttendanceRecord {
    pub id: String,

    /// Badge of the employee this row belongs to, e.g. `"EMP001"`.
    pub badge: String,

    /// Employee display name, denormalised for table rows and search.
    pub employee_name: String,

    pub department: String,

    /// The calendar day this row covers.
    pub date: NaiveDate,

    /// Clock-in time, absent for `Absent` / `OnLeave` rows.
    pub clock_in: Option<NaiveTime>,

    /// Clock-out time, absent while the employee is still in.
    pub clock_out: Option<NaiveTime>,

    pub status: AttendanceStatus,

    /// Hours worked that day. Absent until the day is complete.
    pub work_hours: Option<f32>,

    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Work-hours cell text: one decimal plus unit (`"8.5h"`), or a dash
    /// when the value is absent.
    pub fn work_hours_label(&self) -> String {
        match self.work_hours {
            Some(h) => format!("{h:.1}h"),
            None => "-".to_string(),
        }
    }

    /// Clock cell text (`"09:02"` or a dash).
    pub fn clock_label(t: Option<NaiveTime>) -> String {
        match t {
            Some(t) => crate::util::time::format_clock(t),
            None => "-".to_string(),
        }
    }
}

// ── Clock card state ────────────────────────────────────────────────────

/// State of the clock-in/out card on the attendance view.
///
/// Held as an explicit value on the view state (not ambient globals) and
/// mutated only through [`clock_in`](ClockStatus::clock_in) /
/// [`clock_out`](ClockStatus::clock_out).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockStatus {
    pub clocked_in: bool,
    pub clock_in_time: Option<NaiveTime>,
    pub clock_out_time: Option<NaiveTime>,
}

impl ClockStatus {
    /// Clock in at `now`. Starts a fresh shift: any previous clock-out is
    /// cleared. No-op when already clocked in.
    pub fn clock_in(&mut self, now: NaiveTime) {
        if self.clocked_in {
            return;
        }
        self.clocked_in = true;
        self.clock_in_time = Some(now);
        self.clock_out_time = None;
    }

    /// Clock out at `now`. No-op when not clocked in.
    pub fn clock_out(&mut self, now: NaiveTime) {
        if !self.clocked_in {
            return;
        }
        self.clocked_in = false;
        self.clock_out_time = Some(now);
    }

    /// Hours between clock-in and clock-out, once both exist.
    pub fn worked_hours(&self) -> Option<f32> {
        let (start, end) = (self.clock_in_time?, self.clock_out_time?);
        let secs = end.signed_duration_since(start).num_seconds();
        if secs < 0 {
            return None;
        }
        Some(secs as f32 / 3600.0)
    }
}

// ── Day stats ───────────────────────────────────────────────────────────

/// Headline counts for one calendar day of attendance.
///
/// `present` counts `Present` **and** `Late` rows — a late employee is
/// still in the building. Days with no records report honest zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceDayStats {
    /// Number of records for the day.
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub on_leave: usize,
}

impl AttendanceDayStats {
    /// Compute counts over the rows whose `date` equals `day`.
    pub fn for_day(records: &[AttendanceRecord], day: NaiveDate) -> Self {
        let mut stats = AttendanceDayStats {
            total: 0,
            present: 0,
            absent: 0,
            late: 0,
            on_leave: 0,
        };
        for r in records.iter().filter(|r| r.date == day) {
            stats.total += 1;
            match r.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Late => {
                    stats.present += 1;
                    stats.late += 1;
                }
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::OnLeave => stats.on_leave += 1,
                // Half days count toward the total but not toward present.
                AttendanceStatus::HalfDay => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(day: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("att-{}-{:?}", day, status),
            badge: "EMP001".into(),
            employee_name: "Sarah Johnson".into(),
            department: "Engineering".into(),
            date: day,
            clock_in: NaiveTime::from_hms_opt(9, 0, 0),
            clock_out: NaiveTime::from_hms_opt(17, 30, 0),
            status,
            work_hours: Some(8.5),
            notes: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_work_hours_label() {
        let mut r = make_record(day(2), AttendanceStatus::Present);
        assert_eq!(r.work_hours_label(), "8.5h");
        r.work_hours = None;
        assert_eq!(r.work_hours_label(), "-");
    }

    #[test]
    fn test_day_stats_count_late_as_present() {
        let records = vec![
            make_record(day(2), AttendanceStatus::Present),
            make_record(day(2), AttendanceStatus::Late),
            make_record(day(2), AttendanceStatus::Absent),
            // Different day, must not be counted.
            make_record(day(3), AttendanceStatus::Present),
        ];
        let stats = AttendanceDayStats::for_day(&records, day(2));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.on_leave, 0);
    }

    #[test]
    fn test_day_stats_empty_day_is_zero() {
        let stats = AttendanceDayStats::for_day(&[], day(2));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.present, 0);
    }

    #[test]
    fn test_clock_transitions() {
        let mut clock = ClockStatus::default();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

        clock.clock_in(nine);
        assert!(clock.clocked_in);
        assert_eq!(clock.clock_in_time, Some(nine));
        assert_eq!(clock.clock_out_time, None);

        // Clocking in again while in does nothing.
        clock.clock_in(five);
        assert_eq!(clock.clock_in_time, Some(nine));

        clock.clock_out(five);
        assert!(!clock.clocked_in);
        assert_eq!(clock.clock_out_time, Some(five));
        assert_eq!(clock.worked_hours(), Some(8.0));
    }

    #[test]
    fn test_clock_out_without_in_is_noop() {
        let mut clock = ClockStatus::default();
        clock.clock_out(NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert!(!clock.clocked_in);
        assert_eq!(clock.clock_out_time, None);
    }
}
