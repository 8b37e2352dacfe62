//! Top-level application state and core logic.
//!
//! `StaffScopeApp` owns the five record collections, the per-view filter
//! and dialog state, and user preferences. Rendering is delegated to
//! view sub-modules in `ui/` via `impl` blocks on this struct.

use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::core::attendance::{AttendanceRecord, ClockStatus};
use crate::core::document::Document;
use crate::core::employee::Employee;
use crate::core::filter::{
    AttendanceFilter, DocumentFilter, EmployeeFilter, LeaveFilter, NotificationFilter,
};
use crate::core::fixtures;
use crate::core::leave::{LeaveBalance, LeaveRequest, LeaveStatus};
use crate::core::notification::{Notification, NotificationKind};
use crate::core::store::{new_record_id, Collection};
use crate::core::validate::{DocumentForm, EmployeeForm, FieldError, LeaveForm};
use crate::util::constants;

// ── Navigation ──────────────────────────────────────────────────────────

/// The workspace views reachable from the left navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum View {
    Dashboard,
    Employees,
    Attendance,
    Leave,
    Documents,
    Notifications,
    Settings,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Employees,
        View::Attendance,
        View::Leave,
        View::Documents,
        View::Notifications,
        View::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Employees => "Employees",
            View::Attendance => "Attendance",
            View::Leave => "Leave",
            View::Documents => "Documents",
            View::Notifications => "Notifications",
            View::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Dashboard => "🏠",
            View::Employees => "👥",
            View::Attendance => "🕐",
            View::Leave => "🌴",
            View::Documents => "📄",
            View::Notifications => "🔔",
            View::Settings => "⚙",
        }
    }
}

// ── Dialog state ────────────────────────────────────────────────────────

/// State of the add/edit-employee dialog.
pub struct EmployeeDialog {
    /// `None` = creating a new employee, `Some(id)` = editing that record.
    pub target: Option<String>,
    pub form: EmployeeForm,
    pub errors: Vec<FieldError>,
}

/// State of the new-leave-request dialog.
pub struct LeaveDialog {
    /// Id of the employee the request is for.
    pub employee_id: String,
    pub form: LeaveForm,
    pub errors: Vec<FieldError>,
}

/// State of the upload-document dialog.
pub struct DocumentDialog {
    pub form: DocumentForm,
    pub errors: Vec<FieldError>,
}

/// State of the upload-new-version dialog.
pub struct VersionDialog {
    /// Id of the document receiving the new version.
    pub target: String,
    pub notes: String,
}

// ── Per-view state ──────────────────────────────────────────────────────

/// Filter, pagination and dialog state for the employees view.
#[derive(Default)]
pub struct EmployeesView {
    pub filter: EmployeeFilter,
    /// Indices into the employee collection matching `filter`, in
    /// display order.
    pub filtered: Vec<usize>,
    /// 1-based current page.
    pub page: usize,
    pub dialog: Option<EmployeeDialog>,
    /// Id of the employee shown in the read-only detail dialog.
    pub viewing: Option<String>,
    /// Id pending delete confirmation.
    pub confirm_delete: Option<String>,
}

/// Filter, pagination and clock-card state for the attendance view.
#[derive(Default)]
pub struct AttendanceView {
    pub filter: AttendanceFilter,
    pub filtered: Vec<usize>,
    pub page: usize,
    pub clock: ClockStatus,
}

/// Tab, pagination, dialog and calendar state for the leave view.
pub struct LeaveView {
    pub filter: LeaveFilter,
    pub filtered: Vec<usize>,
    pub page: usize,
    pub dialog: Option<LeaveDialog>,
    /// First day of the month shown by the calendar.
    pub calendar_month: chrono::NaiveDate,
    /// Day clicked in the calendar, for the per-day detail list.
    pub selected_day: Option<chrono::NaiveDate>,
}

/// Filter, pagination and dialog state for the documents view.
#[derive(Default)]
pub struct DocumentsView {
    pub filter: DocumentFilter,
    pub filtered: Vec<usize>,
    pub page: usize,
    pub dialog: Option<DocumentDialog>,
    pub viewing: Option<String>,
    pub version_dialog: Option<VersionDialog>,
    pub confirm_delete: Option<String>,
}

/// Filter and pagination state for the notification list.
#[derive(Default)]
pub struct NotificationsView {
    pub filter: NotificationFilter,
    pub filtered: Vec<usize>,
    pub page: usize,
}

// ── App state ───────────────────────────────────────────────────────────

/// Central application state for StaffScope.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl StaffScopeApp` blocks).
pub struct StaffScopeApp {
    // ── Record collections ──────────────────────────────────────
    pub employees: Collection<Employee>,
    pub attendance: Collection<AttendanceRecord>,
    pub leave_requests: Collection<LeaveRequest>,
    pub documents: Collection<Document>,
    pub notifications: Collection<Notification>,
    pub leave_balance: LeaveBalance,

    // ── Navigation ──────────────────────────────────────────────
    pub active_view: View,

    // ── Per-view state ──────────────────────────────────────────
    pub employees_view: EmployeesView,
    pub attendance_view: AttendanceView,
    pub leave_view: LeaveView,
    pub documents_view: DocumentsView,
    pub notifications_view: NotificationsView,

    // ── Filtering ───────────────────────────────────────────────
    /// Flag: re-compute every view's `filtered` list on the next frame.
    pub needs_refilter: bool,
    /// Timestamp of the last text-field change in any filter. When set,
    /// the update loop waits [`constants::FILTER_DEBOUNCE_MS`] before
    /// re-filtering.
    pub debounce_timer: Option<Instant>,

    // ── Status ──────────────────────────────────────────────────
    /// Human-readable status text shown in the status bar.
    pub status_text: String,

    // ── Dialogs ─────────────────────────────────────────────────
    /// Whether the About dialog is open.
    pub show_about: bool,

    // ── Preferences ─────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    /// Rows per page in the record tables.
    pub page_size: usize,
    /// Name recorded as reviewer on approvals and uploader on documents.
    pub operator: String,

    // ── Export feedback ─────────────────────────────────────────
    /// Receiver for export completion messages from background threads.
    pub export_rx: Option<Receiver<String>>,
    /// Transient status message for export results (shown briefly).
    pub export_message: Option<(String, Instant)>,
}

// ── Construction ────────────────────────────────────────────────────────

impl StaffScopeApp {
    /// Create a new `StaffScopeApp`: apply the theme, seed the demo
    /// collections and restore persisted preferences.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::ui::theme::apply_theme(&cc.egui_ctx);
        Self::install_system_fonts(&cc.egui_ctx);

        let today = crate::util::time::today();
        let mut app = Self {
            employees: Collection::new(fixtures::employees()),
            attendance: Collection::new(fixtures::attendance(today)),
            leave_requests: Collection::new(fixtures::leave_requests(today)),
            documents: Collection::new(fixtures::documents(today)),
            notifications: Collection::new(fixtures::notifications(chrono::Utc::now())),
            leave_balance: fixtures::leave_balance(),

            active_view: View::Dashboard,

            employees_view: EmployeesView::default(),
            attendance_view: AttendanceView::default(),
            leave_view: LeaveView {
                filter: LeaveFilter::default(),
                filtered: Vec::new(),
                page: 1,
                dialog: None,
                calendar_month: first_of_month(today),
                selected_day: None,
            },
            documents_view: DocumentsView::default(),
            notifications_view: NotificationsView::default(),

            needs_refilter: true,
            debounce_timer: None,

            status_text: "Ready".into(),

            show_about: false,

            dark_mode: true,
            page_size: constants::DEFAULT_PAGE_SIZE,
            operator: "Anna Brown".into(),

            export_rx: None,
            export_message: None,
        };

        app.reset_pages();

        // ── Restore persisted preferences ──────────────────────────
        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, "dark_mode") {
                app.dark_mode = dark;
                if dark {
                    crate::ui::theme::apply_dark_theme(&cc.egui_ctx);
                } else {
                    crate::ui::theme::apply_light_theme(&cc.egui_ctx);
                }
            }
            if let Some(size) = eframe::get_value::<usize>(storage, "page_size") {
                app.page_size = size.clamp(constants::MIN_PAGE_SIZE, constants::MAX_PAGE_SIZE);
            }
            if let Some(view) = eframe::get_value::<View>(storage, "active_view") {
                app.active_view = view;
            }
            if let Some(name) = eframe::get_value::<String>(storage, "operator") {
                if !name.trim().is_empty() {
                    app.operator = name;
                }
            }
        }

        tracing::info!(
            "seeded {} employees, {} attendance rows, {} leave requests, {} documents, {} notifications",
            app.employees.len(),
            app.attendance.len(),
            app.leave_requests.len(),
            app.documents.len(),
            app.notifications.len(),
        );

        app
    }

    /// Install system fonts as fallbacks for emoji and symbol coverage.
    ///
    /// On Windows this loads "Segoe UI Emoji" and "Segoe UI Symbol" so
    /// that the icon glyphs in the navigation panel render correctly.
    /// Missing font files are skipped silently.
    fn install_system_fonts(ctx: &egui::Context) {
        let mut fonts = egui::FontDefinitions::default();

        // Segoe UI Symbol — geometric shapes, arrows, misc symbols
        let symbol_path = r"C:\Windows\Fonts\seguisym.ttf";
        if let Ok(data) = std::fs::read(symbol_path) {
            fonts.font_data.insert(
                "segoe_ui_symbol".to_owned(),
                egui::FontData::from_owned(data).into(),
            );
            if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                family.push("segoe_ui_symbol".to_owned());
            }
            if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                family.push("segoe_ui_symbol".to_owned());
            }
        }

        // Segoe UI Emoji — colour emoji (rendered monochrome in egui)
        let emoji_path = r"C:\Windows\Fonts\seguiemj.ttf";
        if let Ok(data) = std::fs::read(emoji_path) {
            fonts.font_data.insert(
                "segoe_ui_emoji".to_owned(),
                egui::FontData::from_owned(data).into(),
            );
            if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                family.push("segoe_ui_emoji".to_owned());
            }
        }

        ctx.set_fonts(fonts);
    }
}

/// First day of the month containing `day`.
pub fn first_of_month(day: chrono::NaiveDate) -> chrono::NaiveDate {
    use chrono::Datelike;
    day.with_day(1).unwrap_or(day)
}

/// Indices of the records in `items` accepted by `pred`, in input order.
fn filtered_indices<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, record)| pred(record))
        .map(|(i, _)| i)
        .collect()
}

// ── Core logic ──────────────────────────────────────────────────────────

impl StaffScopeApp {
    /// Rebuild every view's `filtered` index list from its filter.
    ///
    /// Stale page numbers are tolerated: `paginate` clamps at render time.
    pub fn apply_filters(&mut self) {
        let filter = &self.employees_view.filter;
        self.employees_view.filtered = filtered_indices(self.employees.items(), |e| {
            filter.matches(e)
        });

        let filter = &self.attendance_view.filter;
        self.attendance_view.filtered = filtered_indices(self.attendance.items(), |r| {
            filter.matches(r)
        });

        let filter = &self.leave_view.filter;
        self.leave_view.filtered = filtered_indices(self.leave_requests.items(), |r| {
            filter.matches(r)
        });

        let filter = &self.documents_view.filter;
        self.documents_view.filtered = filtered_indices(self.documents.items(), |d| {
            filter.matches(d)
        });

        let filter = &self.notifications_view.filter;
        self.notifications_view.filtered = filtered_indices(self.notifications.items(), |n| {
            filter.matches(n)
        });

        self.needs_refilter = false;
    }

    /// Put every view back on its first page. Called after reseeding and
    /// on startup.
    pub fn reset_pages(&mut self) {
        self.employees_view.page = 1;
        self.attendance_view.page = 1;
        self.leave_view.page = 1;
        self.documents_view.page = 1;
        self.notifications_view.page = 1;
    }

    /// Record a debounced text-filter change: search caches are refreshed
    /// and the re-filter happens once typing pauses. The changed view's
    /// page resets immediately so the new result set starts at page 1.
    pub fn touch_search_filters(&mut self) {
        self.debounce_timer = Some(Instant::now());
    }

    /// Refresh the derived caches of every filter. Called when the
    /// debounce timer fires, before re-filtering.
    pub fn refresh_filter_caches(&mut self) {
        self.employees_view.filter.update_search_cache();
        self.documents_view.filter.update_search_cache();
        self.attendance_view.filter.update_search_cache();
        self.attendance_view.filter.parse_date();
    }

    // ── Employee mutations ──────────────────────────────────────

    /// Insert a freshly validated employee at the front of the roster.
    pub fn add_employee(&mut self, employee: Employee) {
        let badge = employee.badge.clone();
        if self.employees.insert_front(employee) {
            self.status_text = format!("Added employee {badge}");
            tracing::info!("added employee {badge}");
            self.needs_refilter = true;
        }
    }

    /// Replace the fields of an existing employee with a re-validated copy.
    pub fn update_employee(&mut self, id: &str, updated: Employee) {
        let changed = self.employees.update(id, |e| {
            *e = updated;
        });
        if changed {
            self.status_text = "Employee updated".into();
            self.needs_refilter = true;
        }
    }

    pub fn delete_employee(&mut self, id: &str) {
        if let Some(removed) = self.employees.remove(id) {
            self.status_text = format!("Removed employee {}", removed.badge);
            tracing::info!("removed employee {}", removed.badge);
            self.needs_refilter = true;
        }
    }

    // ── Leave mutations ─────────────────────────────────────────

    /// Insert a freshly validated leave request (always pending).
    pub fn submit_leave(&mut self, request: LeaveRequest) {
        let name = request.employee_name.clone();
        let days = request.duration_days();
        let kind = request.leave_type.label();
        if self.leave_requests.insert_front(request) {
            self.status_text = format!("Leave request for {name} submitted ({days} days)");
            tracing::info!("leave request submitted for {name}");
            self.push_notification(
                NotificationKind::Leave,
                "New leave request".into(),
                format!("{name} requested {days} days of {kind} leave."),
            );
            self.needs_refilter = true;
        }
    }

    /// Approve or reject a pending request, recording the reviewer.
    pub fn review_leave(&mut self, id: &str, decision: LeaveStatus) {
        let reviewer = self.operator.clone();
        let today = crate::util::time::today();
        let mut reviewed = None;
        let changed = self.leave_requests.update(id, |r| {
            r.status = decision;
            r.reviewed_by = Some(reviewer);
            r.reviewed_on = Some(today);
            reviewed = Some((r.employee_name.clone(), r.leave_type.label()));
        });
        if changed {
            let verb = decision.label().to_lowercase();
            self.status_text = format!("Request {verb}");
            if let Some((name, kind)) = reviewed {
                self.push_notification(
                    NotificationKind::Approval,
                    format!("Leave request {verb}"),
                    format!("{kind} leave for {name} was {verb}."),
                );
            }
            self.needs_refilter = true;
        }
    }

    // ── Document mutations ──────────────────────────────────────

    pub fn add_document(&mut self, document: Document) {
        let name = document.name.clone();
        if self.documents.insert_front(document) {
            self.status_text = format!("Uploaded \"{name}\"");
            tracing::info!("uploaded document {name}");
            self.needs_refilter = true;
        }
    }

    pub fn delete_document(&mut self, id: &str) {
        if let Some(removed) = self.documents.remove(id) {
            self.status_text = format!("Deleted \"{}\"", removed.name);
            self.needs_refilter = true;
        }
    }

    /// Append a new version to a document and promote it to current.
    pub fn add_document_version(&mut self, id: &str, notes: Option<String>) {
        let uploader = self.operator.clone();
        let today = crate::util::time::today();
        let mut new_version = None;
        self.documents.update(id, |d| {
            d.record_new_version(uploader, notes, today);
            new_version = Some(d.current_version.clone());
        });
        if let Some(v) = new_version {
            self.status_text = format!("Published version {v}");
            self.needs_refilter = true;
        }
    }

    // ── Notification mutations ──────────────────────────────────

    /// Push a generated notification to the top of the feed.
    fn push_notification(&mut self, kind: NotificationKind, title: String, message: String) {
        self.notifications.insert_front(Notification {
            id: new_record_id(),
            kind,
            title,
            message,
            timestamp: chrono::Utc::now(),
            read: false,
        });
    }

    pub fn mark_notification_read(&mut self, id: &str) {
        if self.notifications.update(id, |n| n.read = true) {
            self.needs_refilter = true;
        }
    }

    pub fn mark_all_notifications_read(&mut self) {
        let ids: Vec<String> = self
            .notifications
            .items()
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        let count = ids.len();
        for id in ids {
            self.notifications.update(&id, |n| n.read = true);
        }
        if count > 0 {
            self.status_text = format!("Marked {count} notifications as read");
            self.needs_refilter = true;
        }
    }

    pub fn delete_notification(&mut self, id: &str) {
        if self.notifications.remove(id).is_some() {
            self.needs_refilter = true;
        }
    }

    // ── Demo data ───────────────────────────────────────────────

    /// Throw away all in-memory changes and reseed every collection.
    pub fn reseed(&mut self) {
        let today = crate::util::time::today();
        self.employees.replace_all(fixtures::employees());
        self.attendance.replace_all(fixtures::attendance(today));
        self.leave_requests
            .replace_all(fixtures::leave_requests(today));
        self.documents.replace_all(fixtures::documents(today));
        self.notifications
            .replace_all(fixtures::notifications(chrono::Utc::now()));
        self.leave_balance = fixtures::leave_balance();

        self.employees_view.filter.clear();
        self.attendance_view.filter.clear();
        self.leave_view.filter.clear();
        self.documents_view.filter.clear();
        self.notifications_view.filter.clear();
        self.reset_pages();
        self.needs_refilter = true;
        self.status_text = "Demo data reset".into();
        tracing::info!("demo data reseeded");
    }

    // ── Lookups shared by views ─────────────────────────────────

    /// Count of records in the active view's collection and its filtered
    /// subset, for the status bar.
    pub fn active_view_counts(&self) -> Option<(usize, usize, &'static str)> {
        match self.active_view {
            View::Employees => Some((
                self.employees_view.filtered.len(),
                self.employees.len(),
                "employees",
            )),
            View::Attendance => Some((
                self.attendance_view.filtered.len(),
                self.attendance.len(),
                "attendance records",
            )),
            View::Leave => Some((
                self.leave_view.filtered.len(),
                self.leave_requests.len(),
                "leave requests",
            )),
            View::Documents => Some((
                self.documents_view.filtered.len(),
                self.documents.len(),
                "documents",
            )),
            View::Notifications => Some((
                self.notifications_view.filtered.len(),
                self.notifications.len(),
                "notifications",
            )),
            View::Dashboard | View::Settings => None,
        }
    }
}
