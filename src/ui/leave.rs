//! Leave view: request queue with review actions, balance summary,
//! the new-request dialog, and the team calendar.

use chrono::{Datelike, NaiveDate};
use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::app::{LeaveDialog, StaffScopeApp};
use crate::core::employee::EmployeeStatus;
use crate::core::leave::{LeaveStats, LeaveStatus, LeaveType};
use crate::core::query::paginate;
use crate::core::store::new_record_id;
use crate::core::validate::{validate_leave, FieldError, LeaveForm};
use crate::ui::{theme, widgets};
use crate::util::time::{format_date, format_date_long, today};

enum RowAction {
    Approve(String),
    Reject(String),
}

impl StaffScopeApp {
    /// Render the leave view.
    ///
    /// The whole view scrolls because the calendar below the table can
    /// push content past the panel height.
    pub fn render_leave_view(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| self.render_leave_view_inner(ui));
    }

    fn render_leave_view_inner(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        // ── Stat cards ──────────────────────────────────────────────
        let stats = LeaveStats::compute(self.leave_requests.items());
        ui.horizontal(|ui| {
            widgets::stat_card(
                ui,
                dark,
                "⏳",
                "Pending",
                &stats.pending.to_string(),
                theme::warning(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "✔",
                "Approved",
                &stats.approved.to_string(),
                theme::success(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "✖",
                "Rejected",
                &stats.rejected.to_string(),
                theme::danger(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🌴",
                "Days Remaining",
                &format!("{:.0}", self.leave_balance.remaining()),
                theme::accent(dark),
            );
        });
        ui.add_space(theme::SECTION_SPACING);

        // ── Status tabs + new request ───────────────────────────────
        let mut tab_changed = false;
        ui.horizontal(|ui| {
            let current = self.leave_view.filter.status;
            let mut tabs = vec![("All".to_owned(), None)];
            for status in LeaveStatus::ALL {
                let count = match status {
                    LeaveStatus::Pending => stats.pending,
                    LeaveStatus::Approved => stats.approved,
                    LeaveStatus::Rejected => stats.rejected,
                };
                tabs.push((format!("{} ({count})", status.label()), Some(status)));
            }
            for (label, value) in tabs {
                if ui.selectable_label(current == value, label).clicked() && current != value {
                    self.leave_view.filter.status = value;
                    tab_changed = true;
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ New Request").clicked() {
                    self.open_leave_dialog();
                }
            });
        });
        if tab_changed {
            self.leave_view.page = 1;
            self.needs_refilter = true;
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Request table ───────────────────────────────────────────
        let mut action: Option<RowAction> = None;
        let resolved = paginate(
            &self.leave_view.filtered,
            self.page_size,
            self.leave_view.page,
        );
        let page_rows: Vec<usize> = resolved.items.to_vec();
        let requests = self.leave_requests.items();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(320.0)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(150.0).clip(true))
            .column(Column::auto().at_least(78.0))
            .column(Column::auto().at_least(86.0))
            .column(Column::auto().at_least(86.0))
            .column(Column::auto().at_least(44.0))
            .column(Column::auto().at_least(84.0))
            .column(Column::auto().at_least(86.0))
            .column(Column::auto().at_least(110.0).clip(true))
            .column(Column::remainder().at_least(70.0))
            .header(22.0, |mut header| {
                for title in [
                    "Employee", "Type", "From", "To", "Days", "Status", "Applied", "Reviewer",
                    "Actions",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(theme::TABLE_ROW_HEIGHT, page_rows.len(), |mut row| {
                    let Some(&idx) = page_rows.get(row.index()) else {
                        return;
                    };
                    let Some(r) = requests.get(idx) else {
                        return;
                    };
                    row.col(|ui| {
                        ui.label(&r.employee_name);
                    });
                    row.col(|ui| {
                        ui.label(r.leave_type.label());
                    });
                    row.col(|ui| {
                        ui.label(format_date(r.start_date));
                    });
                    row.col(|ui| {
                        ui.label(format_date(r.end_date));
                    });
                    row.col(|ui| {
                        ui.label(r.duration_days().to_string());
                    });
                    row.col(|ui| {
                        widgets::badge_pill(
                            ui,
                            r.status.label(),
                            theme::leave_status_color(r.status, dark),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format_date(r.applied_on));
                    });
                    row.col(|ui| {
                        if let Some(reviewer) = &r.reviewed_by {
                            ui.label(
                                RichText::new(reviewer).color(theme::text_secondary(dark)),
                            );
                        }
                    });
                    row.col(|ui| {
                        if r.status == LeaveStatus::Pending {
                            if ui.small_button("✔").on_hover_text("Approve").clicked() {
                                action = Some(RowAction::Approve(r.id.clone()));
                            }
                            if ui.small_button("✖").on_hover_text("Reject").clicked() {
                                action = Some(RowAction::Reject(r.id.clone()));
                            }
                        }
                    });
                })
            });

        ui.add_space(6.0);
        widgets::pagination_bar(ui, dark, &mut self.leave_view.page, &resolved);

        match action {
            Some(RowAction::Approve(id)) => self.review_leave(&id, LeaveStatus::Approved),
            Some(RowAction::Reject(id)) => self.review_leave(&id, LeaveStatus::Rejected),
            None => {}
        }

        ui.add_space(theme::SECTION_SPACING);
        egui::CollapsingHeader::new("📅 Team Calendar")
            .default_open(false)
            .show(ui, |ui| {
                self.render_leave_calendar(ui);
            });
    }

    /// Month grid highlighting days covered by approved leave.
    fn render_leave_calendar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let month = self.leave_view.calendar_month;
        let selected = self.leave_view.selected_day;
        let day_count = days_in_month(month);
        let offset = month.weekday().num_days_from_monday() as usize;

        // Which days of this month fall inside approved leave
        let mut covered = vec![false; day_count as usize];
        for r in self.leave_requests.items() {
            if r.status != LeaveStatus::Approved {
                continue;
            }
            for (i, flag) in covered.iter_mut().enumerate() {
                if let Some(d) = month.with_day(i as u32 + 1) {
                    if r.covers(d) {
                        *flag = true;
                    }
                }
            }
        }

        let mut month_delta: i32 = 0;
        let mut clicked_day: Option<NaiveDate> = None;

        ui.horizontal(|ui| {
            if ui.small_button("◀").clicked() {
                month_delta = -1;
            }
            ui.label(
                RichText::new(month.format("%B %Y").to_string())
                    .strong()
                    .color(theme::text_primary(dark)),
            );
            if ui.small_button("▶").clicked() {
                month_delta = 1;
            }
        });
        ui.add_space(4.0);

        egui::Grid::new("leave_calendar")
            .num_columns(7)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for weekday in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
                    ui.label(
                        RichText::new(weekday)
                            .size(10.0)
                            .color(theme::text_dim(dark)),
                    );
                }
                ui.end_row();

                let cells = offset + day_count as usize;
                let rows = cells.div_ceil(7);
                for week in 0..rows {
                    for slot in 0..7 {
                        let cell = week * 7 + slot;
                        if cell < offset || cell >= offset + day_count as usize {
                            ui.label("");
                            continue;
                        }
                        let day_number = (cell - offset + 1) as u32;
                        let Some(date) = month.with_day(day_number) else {
                            ui.label("");
                            continue;
                        };
                        let is_covered = covered[day_number as usize - 1];
                        let is_selected = selected == Some(date);

                        let mut button = egui::Button::new(
                            RichText::new(day_number.to_string()).size(11.0),
                        )
                        .min_size(egui::vec2(34.0, 26.0));
                        if is_covered {
                            button = button.fill(theme::success(dark).gamma_multiply(0.25));
                        }
                        if is_selected {
                            button =
                                button.stroke(egui::Stroke::new(1.5, theme::accent(dark)));
                        }
                        if ui.add(button).clicked() {
                            clicked_day = Some(date);
                        }
                    }
                    ui.end_row();
                }
            });

        if month_delta != 0 {
            self.leave_view.calendar_month = shift_month(month, month_delta);
            self.leave_view.selected_day = None;
        }
        if let Some(date) = clicked_day {
            // Second click on the same day clears the selection
            self.leave_view.selected_day = if selected == Some(date) {
                None
            } else {
                Some(date)
            };
        }

        if let Some(date) = self.leave_view.selected_day {
            ui.add_space(6.0);
            widgets::section_heading(ui, dark, &format_date_long(date));
            let mut any = false;
            for r in self.leave_requests.items() {
                if r.status == LeaveStatus::Approved && r.covers(date) {
                    any = true;
                    ui.label(
                        RichText::new(format!(
                            "🌴 {} — {} ({} to {})",
                            r.employee_name,
                            r.leave_type.label(),
                            format_date(r.start_date),
                            format_date(r.end_date),
                        ))
                        .size(12.0)
                        .color(theme::text_secondary(dark)),
                    );
                }
            }
            if !any {
                ui.label(
                    RichText::new("No approved leave on this day")
                        .size(12.0)
                        .color(theme::text_dim(dark)),
                );
            }
        }
    }

    /// Open the new-request dialog, defaulting to the first active
    /// employee.
    fn open_leave_dialog(&mut self) {
        let employee_id = self
            .employees
            .items()
            .iter()
            .find(|e| e.status == EmployeeStatus::Active)
            .or_else(|| self.employees.items().first())
            .map(|e| e.id.clone())
            .unwrap_or_default();
        self.leave_view.dialog = Some(LeaveDialog {
            employee_id,
            form: LeaveForm::default(),
            errors: Vec::new(),
        });
    }

    /// Render the new-leave-request dialog, if open.
    pub fn render_leave_dialog(&mut self, ctx: &egui::Context) {
        let dark = self.dark_mode;
        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        {
            let Some(dialog) = self.leave_view.dialog.as_mut() else {
                return;
            };
            let employees = self.employees.items();
            let balance = self.leave_balance;

            egui::Window::new("🌴 New Leave Request")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .default_width(360.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::Grid::new("leave_form")
                        .num_columns(2)
                        .spacing([10.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Employee");
                            let selected_name = employees
                                .iter()
                                .find(|e| e.id == dialog.employee_id)
                                .map(|e| e.full_name())
                                .unwrap_or_else(|| "Select…".to_owned());
                            egui::ComboBox::from_id_salt("leave_form_employee")
                                .selected_text(selected_name)
                                .show_ui(ui, |ui| {
                                    for e in employees {
                                        ui.selectable_value(
                                            &mut dialog.employee_id,
                                            e.id.clone(),
                                            e.full_name(),
                                        );
                                    }
                                });
                            ui.end_row();

                            ui.label("Type");
                            egui::ComboBox::from_id_salt("leave_form_type")
                                .selected_text(dialog.form.leave_type.label())
                                .show_ui(ui, |ui| {
                                    for lt in LeaveType::ALL {
                                        ui.selectable_value(
                                            &mut dialog.form.leave_type,
                                            lt,
                                            lt.label(),
                                        );
                                    }
                                });
                            ui.end_row();

                            ui.label("First day");
                            ui.add(
                                egui::TextEdit::singleline(&mut dialog.form.start_input)
                                    .hint_text("YYYY-MM-DD"),
                            );
                            ui.end_row();

                            ui.label("Last day");
                            ui.add(
                                egui::TextEdit::singleline(&mut dialog.form.end_input)
                                    .hint_text("YYYY-MM-DD"),
                            );
                            ui.end_row();

                            ui.label("Reason");
                            ui.add(
                                egui::TextEdit::multiline(&mut dialog.form.reason)
                                    .desired_rows(3)
                                    .hint_text("Why is this leave needed?"),
                            );
                            ui.end_row();
                        });

                    ui.label(
                        RichText::new(format!(
                            "Balance: {:.0} of {:.0} days remaining",
                            balance.remaining(),
                            balance.annual + balance.sick + balance.personal,
                        ))
                        .size(11.0)
                        .color(theme::text_secondary(dark)),
                    );

                    if !dialog.errors.is_empty() {
                        ui.add_space(4.0);
                        for err in &dialog.errors {
                            ui.label(
                                RichText::new(format!("• {}", err.message))
                                    .color(theme::danger(dark))
                                    .size(11.0),
                            );
                        }
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("📨 Submit").clicked() {
                            submitted = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
        }

        if cancelled || !open {
            self.leave_view.dialog = None;
            return;
        }
        if submitted {
            if let Some(dialog) = self.leave_view.dialog.take() {
                match self.employees.get(&dialog.employee_id).cloned() {
                    Some(employee) => {
                        match validate_leave(&dialog.form, new_record_id(), &employee, today()) {
                            Ok(request) => self.submit_leave(request),
                            Err(errors) => {
                                self.leave_view.dialog = Some(LeaveDialog { errors, ..dialog });
                            }
                        }
                    }
                    None => {
                        let errors = vec![FieldError {
                            field: "employee",
                            message: "Select an employee".into(),
                        }];
                        self.leave_view.dialog = Some(LeaveDialog { errors, ..dialog });
                    }
                }
            }
        }
    }
}

/// Number of days in the month starting at `first`.
fn days_in_month(first: NaiveDate) -> u32 {
    let next = shift_month(first, 1);
    next.signed_duration_since(first).num_days() as u32
}

/// First day of the month `delta` months away from `first`.
fn shift_month(first: NaiveDate, delta: i32) -> NaiveDate {
    let zero_based = first.year() * 12 + first.month() as i32 - 1 + delta;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(first)
}
