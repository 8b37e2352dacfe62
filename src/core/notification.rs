//! In-app notification records.
//!
//! Timestamps are stored as real `DateTime<Utc>` values and rendered as
//! relative text at paint time, so ordering and age filtering stay typed
//! rather than string-based.

use chrono::{DateTime, Utc};

/// Source category of a notification. Closed set; drives the icon, the
/// accent colour and the filter combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum NotificationKind {
    Leave,
    Attendance,
    Alert,
    Approval,
    System,
}

impl NotificationKind {
    /// Every kind, in display order.
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::Leave,
        NotificationKind::Attendance,
        NotificationKind::Alert,
        NotificationKind::Approval,
        NotificationKind::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Leave => "Leave",
            NotificationKind::Attendance => "Attendance",
            NotificationKind::Alert => "Alert",
            NotificationKind::Approval => "Approval",
            NotificationKind::System => "System",
        }
    }
}

/// One notification entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Number of unread notifications; shown as the nav badge.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let make = |read| Notification {
            id: format!("n-{read}"),
            kind: NotificationKind::System,
            title: "t".into(),
            message: "m".into(),
            timestamp: Utc::now(),
            read,
        };
        assert_eq!(unread_count(&[]), 0);
        assert_eq!(unread_count(&[make(false), make(true), make(false)]), 2);
    }
}
