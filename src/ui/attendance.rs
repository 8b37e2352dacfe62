//! Attendance view: today's headline counts, the clock-in/out card,
//! and the filterable day-log table.

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::app::StaffScopeApp;
use crate::core::attendance::{AttendanceDayStats, AttendanceRecord, AttendanceStatus};
use crate::core::employee::department_names;
use crate::core::query::paginate;
use crate::ui::{theme, widgets};
use crate::util::time::{format_clock, format_date, today};

impl StaffScopeApp {
    /// Render the attendance view.
    pub fn render_attendance_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let day = today();

        // ── Today's headline counts ─────────────────────────────────
        let stats = AttendanceDayStats::for_day(self.attendance.items(), day);
        ui.horizontal(|ui| {
            widgets::stat_card(
                ui,
                dark,
                "✔",
                "Present Today",
                &stats.present.to_string(),
                theme::success(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "✖",
                "Absent",
                &stats.absent.to_string(),
                theme::danger(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🕐",
                "Late",
                &stats.late.to_string(),
                theme::warning(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🌴",
                "On Leave",
                &stats.on_leave.to_string(),
                theme::attendance_status_color(AttendanceStatus::OnLeave, dark),
            );
        });
        ui.add_space(theme::SECTION_SPACING);

        self.render_clock_card(ui);
        ui.add_space(theme::SECTION_SPACING);

        // ── Filter row ──────────────────────────────────────────────
        let departments = department_names(self.employees.items());
        let mut text_changed = false;
        let mut combo_changed = false;
        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.attendance_view.filter.search)
                    .hint_text("Search employee or badge…")
                    .desired_width(200.0),
            );
            if search.changed() {
                text_changed = true;
            }
            let date = ui
                .add(
                    egui::TextEdit::singleline(&mut self.attendance_view.filter.date_input)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(92.0),
                )
                .on_hover_text("Show a single day only");
            if date.changed() {
                text_changed = true;
            }
            combo_changed |= widgets::option_combo(
                ui,
                "attendance_status",
                &mut self.attendance_view.filter.status,
                &AttendanceStatus::ALL,
                "All Statuses",
                AttendanceStatus::label,
            );
            combo_changed |= widgets::string_combo(
                ui,
                "attendance_department",
                &mut self.attendance_view.filter.department,
                &departments,
                "All Departments",
            );
            if !self.attendance_view.filter.is_empty()
                && ui.small_button("✖").on_hover_text("Clear filters").clicked()
            {
                self.attendance_view.filter.clear();
                combo_changed = true;
            }
        });
        if text_changed {
            self.attendance_view.page = 1;
            self.touch_search_filters();
        }
        if combo_changed {
            self.attendance_view.page = 1;
            self.needs_refilter = true;
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Day log table ───────────────────────────────────────────
        let resolved = paginate(
            &self.attendance_view.filtered,
            self.page_size,
            self.attendance_view.page,
        );
        let page_rows: Vec<usize> = resolved.items.to_vec();
        let records = self.attendance.items();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            // Leave room for the pagination bar below the table
            .max_scroll_height((ui.available_height() - 40.0).max(120.0))
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(150.0).clip(true))
            .column(Column::auto().at_least(66.0))
            .column(Column::auto().at_least(86.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(56.0))
            .column(Column::auto().at_least(84.0))
            .column(Column::remainder().clip(true))
            .header(22.0, |mut header| {
                for title in [
                    "Employee", "Badge", "Date", "Clock In", "Clock Out", "Hours", "Status",
                    "Notes",
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
                    let Some(r) = records.get(idx) else {
                        return;
                    };
                    row.col(|ui| {
                        ui.label(&r.employee_name);
                    });
                    row.col(|ui| {
                        ui.label(&r.badge);
                    });
                    row.col(|ui| {
                        ui.label(format_date(r.date));
                    });
                    row.col(|ui| {
                        ui.label(AttendanceRecord::clock_label(r.clock_in));
                    });
                    row.col(|ui| {
                        ui.label(AttendanceRecord::clock_label(r.clock_out));
                    });
                    row.col(|ui| {
                        ui.label(r.work_hours_label());
                    });
                    row.col(|ui| {
                        widgets::badge_pill(
                            ui,
                            r.status.label(),
                            theme::attendance_status_color(r.status, dark),
                        );
                    });
                    row.col(|ui| {
                        if let Some(notes) = &r.notes {
                            ui.label(
                                RichText::new(notes).color(theme::text_secondary(dark)),
                            );
                        }
                    });
                });
            });

        ui.add_space(6.0);
        widgets::pagination_bar(ui, dark, &mut self.attendance_view.page, &resolved);
    }

    /// Render the personal clock-in/out card.
    fn render_clock_card(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        // Tick once a second so the wall clock stays current.
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_secs(1));

        egui::Frame::new()
            .fill(theme::card_fill(dark))
            .stroke(egui::Stroke::new(1.0, theme::text_dim(dark).gamma_multiply(0.35)))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let clock = &mut self.attendance_view.clock;
                    let now = chrono::Local::now().time();

                    ui.label(RichText::new("⏱").size(22.0).color(theme::accent(dark)));
                    ui.add_space(6.0);

                    ui.vertical(|ui| {
                        let status_line = if clock.clocked_in {
                            match clock.clock_in_time {
                                Some(t) => format!("On shift since {}", format_clock(t)),
                                None => "On shift".to_owned(),
                            }
                        } else if let (Some(start), Some(end), Some(hours)) = (
                            clock.clock_in_time,
                            clock.clock_out_time,
                            clock.worked_hours(),
                        ) {
                            format!(
                                "Shift complete: {} - {} ({hours:.1}h)",
                                format_clock(start),
                                format_clock(end)
                            )
                        } else {
                            "Not clocked in today".to_owned()
                        };
                        ui.label(RichText::new(status_line).strong());
                        ui.label(
                            RichText::new(format_date(today()))
                                .size(11.0)
                                .color(theme::text_secondary(dark)),
                        );
                    });

                    ui.add_space(12.0);
                    if clock.clocked_in {
                        if ui.button("⏹ Clock Out").clicked() {
                            clock.clock_out(now);
                        }
                    } else if ui.button("▶ Clock In").clicked() {
                        clock.clock_in(now);
                    }

                    // Wall clock, right-aligned
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(chrono::Local::now().format("%H:%M:%S").to_string())
                                .size(18.0)
                                .monospace()
                                .color(theme::text_primary(dark)),
                        );
                    });
                });
            });
    }
}
