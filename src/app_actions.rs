//! Extended actions for [`StaffScopeApp`]: export, keyboard shortcuts,
//! export message processing, and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use crate::app::{StaffScopeApp, View};
use crate::core::attendance::AttendanceRecord;
use crate::core::document::Document;
use crate::core::employee::Employee;
use crate::core::leave::LeaveRequest;
use crate::core::notification::Notification;
use crate::export::csv_export::CsvRecord;
use crate::util::constants;

// ── Filtered snapshots ──────────────────────────────────────────────────

impl StaffScopeApp {
    /// Clone the employees currently passing the filter, in display order.
    ///
    /// Cloning is necessary because export happens on a background thread
    /// (for the file dialog) and can't hold references to `self`.
    fn filtered_employees(&self) -> Vec<Employee> {
        self.employees_view
            .filtered
            .iter()
            .filter_map(|&i| self.employees.items().get(i).cloned())
            .collect()
    }

    fn filtered_attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance_view
            .filtered
            .iter()
            .filter_map(|&i| self.attendance.items().get(i).cloned())
            .collect()
    }

    fn filtered_leave_requests(&self) -> Vec<LeaveRequest> {
        self.leave_view
            .filtered
            .iter()
            .filter_map(|&i| self.leave_requests.items().get(i).cloned())
            .collect()
    }

    fn filtered_documents(&self) -> Vec<Document> {
        self.documents_view
            .filtered
            .iter()
            .filter_map(|&i| self.documents.items().get(i).cloned())
            .collect()
    }

    fn filtered_notifications(&self) -> Vec<Notification> {
        self.notifications_view
            .filtered
            .iter()
            .filter_map(|&i| self.notifications.items().get(i).cloned())
            .collect()
    }
}

// ── Export actions ──────────────────────────────────────────────────────

impl StaffScopeApp {
    /// Export the active view's filtered records to CSV via a native
    /// save dialog.
    pub fn export_csv(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some((
                "Export already in progress".into(),
                std::time::Instant::now(),
            ));
            return;
        }
        match self.active_view {
            View::Employees => {
                let records = self.filtered_employees();
                self.spawn_csv_export(records, "employees");
            }
            View::Attendance => {
                let records = self.filtered_attendance();
                self.spawn_csv_export(records, "attendance");
            }
            View::Leave => {
                let records = self.filtered_leave_requests();
                self.spawn_csv_export(records, "leave_requests");
            }
            View::Documents => {
                let records = self.filtered_documents();
                self.spawn_csv_export(records, "documents");
            }
            View::Notifications => {
                let records = self.filtered_notifications();
                self.spawn_csv_export(records, "notifications");
            }
            View::Dashboard | View::Settings => {}
        }
    }

    /// Export the active view's filtered records to JSON via a native
    /// save dialog.
    pub fn export_json(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some((
                "Export already in progress".into(),
                std::time::Instant::now(),
            ));
            return;
        }
        match self.active_view {
            View::Employees => {
                let records = self.filtered_employees();
                self.spawn_json_export(records, "employees");
            }
            View::Attendance => {
                let records = self.filtered_attendance();
                self.spawn_json_export(records, "attendance");
            }
            View::Leave => {
                let records = self.filtered_leave_requests();
                self.spawn_json_export(records, "leave_requests");
            }
            View::Documents => {
                let records = self.filtered_documents();
                self.spawn_json_export(records, "documents");
            }
            View::Notifications => {
                let records = self.filtered_notifications();
                self.spawn_json_export(records, "notifications");
            }
            View::Dashboard | View::Settings => {}
        }
    }

    /// Spawn the background CSV export: native save dialog, then the
    /// write, with the outcome reported through `export_rx`.
    fn spawn_csv_export<T>(&mut self, records: Vec<T>, noun: &'static str)
    where
        T: CsvRecord + Send + 'static,
    {
        if records.is_empty() {
            self.export_message =
                Some((format!("No {noun} to export"), std::time::Instant::now()));
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(constants::EXPORT_CHANNEL_BOUND);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name(format!("StaffScope_{noun}.csv"))
                .save_file()
            {
                match crate::export::csv_export::export_csv(&records, &path) {
                    Ok(()) => {
                        let _ = tx.send(format!("Exported {} {noun} to CSV", records.len()));
                    }
                    Err(e) => {
                        tracing::error!("CSV export failed: {}", e);
                        let _ = tx.send(format!("Export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Spawn the background JSON export. Same shape as the CSV path.
    fn spawn_json_export<T>(&mut self, records: Vec<T>, noun: &'static str)
    where
        T: serde::Serialize + Send + 'static,
    {
        if records.is_empty() {
            self.export_message =
                Some((format!("No {noun} to export"), std::time::Instant::now()));
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(constants::EXPORT_CHANNEL_BOUND);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name(format!("StaffScope_{noun}.json"))
                .save_file()
            {
                match crate::export::json_export::export_json(&records, &path) {
                    Ok(()) => {
                        let _ = tx.send(format!("Exported {} {noun} to JSON", records.len()));
                    }
                    Err(e) => {
                        tracing::error!("JSON export failed: {}", e);
                        let _ = tx.send(format!("Export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Process export completion messages from background threads.
    ///
    /// Called once per frame. Checks the `export_rx` channel for messages
    /// and clears stale export messages after a timeout.
    pub fn process_export_messages(&mut self) {
        if let Some(rx) = &self.export_rx {
            match rx.try_recv() {
                Ok(msg) => {
                    self.export_message = Some((msg, std::time::Instant::now()));
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // Sender dropped without sending (user cancelled the save dialog).
                    // Clear the receiver so future exports are not permanently blocked.
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {
                    // Still waiting for the background thread — nothing to do.
                }
            }
        }
        // Clear export message after 4 seconds
        if let Some((_, instant)) = &self.export_message {
            if instant.elapsed() > std::time::Duration::from_secs(4) {
                self.export_message = None;
            }
        }
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl StaffScopeApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+1..7**: Switch view
    /// - **Ctrl+E**: Export the active view to CSV
    /// - **Ctrl+Shift+X**: Clear the active view's filters
    /// - **Escape**: Close the topmost open dialog
    /// - **Page Up/Down**: Previous / next page in the active view
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            // Ctrl+digit = jump to view
            if i.modifiers.ctrl {
                let bindings = [
                    (egui::Key::Num1, View::Dashboard),
                    (egui::Key::Num2, View::Employees),
                    (egui::Key::Num3, View::Attendance),
                    (egui::Key::Num4, View::Leave),
                    (egui::Key::Num5, View::Documents),
                    (egui::Key::Num6, View::Notifications),
                    (egui::Key::Num7, View::Settings),
                ];
                for (key, view) in bindings {
                    if i.key_pressed(key) {
                        self.active_view = view;
                    }
                }
            }

            // Ctrl+E = export CSV
            if i.modifiers.ctrl && !i.modifiers.shift && i.key_pressed(egui::Key::E) {
                self.export_csv();
            }

            // Ctrl+Shift+X = clear the active view's filters
            if i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::X) {
                self.clear_active_filters();
            }

            // Escape = close the topmost dialog, then clear selections
            if i.key_pressed(egui::Key::Escape) {
                if self.show_about {
                    self.show_about = false;
                } else if self.employees_view.dialog.is_some() {
                    self.employees_view.dialog = None;
                } else if self.employees_view.confirm_delete.is_some() {
                    self.employees_view.confirm_delete = None;
                } else if self.employees_view.viewing.is_some() {
                    self.employees_view.viewing = None;
                } else if self.leave_view.dialog.is_some() {
                    self.leave_view.dialog = None;
                } else if self.documents_view.dialog.is_some() {
                    self.documents_view.dialog = None;
                } else if self.documents_view.version_dialog.is_some() {
                    self.documents_view.version_dialog = None;
                } else if self.documents_view.confirm_delete.is_some() {
                    self.documents_view.confirm_delete = None;
                } else if self.documents_view.viewing.is_some() {
                    self.documents_view.viewing = None;
                } else if self.leave_view.selected_day.is_some() {
                    self.leave_view.selected_day = None;
                }
            }

            // Page Up/Down = page navigation in the active view
            if i.key_pressed(egui::Key::PageDown) {
                if let Some(page) = self.active_page_mut() {
                    // Clamped to the last page at render time
                    *page += 1;
                }
            }
            if i.key_pressed(egui::Key::PageUp) {
                if let Some(page) = self.active_page_mut() {
                    *page = page.saturating_sub(1).max(1);
                }
            }
        });
    }

    /// Mutable access to the active record view's page number, when the
    /// active view has one.
    fn active_page_mut(&mut self) -> Option<&mut usize> {
        match self.active_view {
            View::Employees => Some(&mut self.employees_view.page),
            View::Attendance => Some(&mut self.attendance_view.page),
            View::Leave => Some(&mut self.leave_view.page),
            View::Documents => Some(&mut self.documents_view.page),
            View::Notifications => Some(&mut self.notifications_view.page),
            View::Dashboard | View::Settings => None,
        }
    }

    /// Reset every filter in the active view and go back to page 1.
    pub fn clear_active_filters(&mut self) {
        match self.active_view {
            View::Employees => {
                self.employees_view.filter.clear();
                self.employees_view.page = 1;
            }
            View::Attendance => {
                self.attendance_view.filter.clear();
                self.attendance_view.page = 1;
            }
            View::Leave => {
                self.leave_view.filter.clear();
                self.leave_view.page = 1;
            }
            View::Documents => {
                self.documents_view.filter.clear();
                self.documents_view.page = 1;
            }
            View::Notifications => {
                self.notifications_view.filter.clear();
                self.notifications_view.page = 1;
            }
            View::Dashboard | View::Settings => return,
        }
        self.needs_refilter = true;
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl StaffScopeApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("StaffScope")
                            .color(crate::ui::theme::accent(self.dark_mode))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", crate::util::constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.label("A fast, filterable HR records workspace");
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new("Developer: Swatto")
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(4.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/StaffScope",
                        crate::util::constants::APP_GITHUB_URL,
                    );
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
