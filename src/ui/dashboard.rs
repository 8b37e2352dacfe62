//! Dashboard view: headline cards, recent activity, and a department
//! headcount breakdown.

use egui::RichText;

use crate::app::{StaffScopeApp, View};
use crate::core::attendance::AttendanceDayStats;
use crate::core::employee::EmployeeStats;
use crate::core::leave::LeaveStats;
use crate::core::notification::unread_count;
use crate::core::query::tally_by;
use crate::ui::{theme, widgets};
use crate::util::time::{format_date, format_relative, today};

/// Rows shown in each recent-activity list.
const RECENT_ROWS: usize = 5;

impl StaffScopeApp {
    /// Render the dashboard.
    pub fn render_dashboard_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let day = today();

        let employee_stats = EmployeeStats::compute(self.employees.items());
        let day_stats = AttendanceDayStats::for_day(self.attendance.items(), day);
        let leave_stats = LeaveStats::compute(self.leave_requests.items());
        let unread = unread_count(self.notifications.items());

        // ── Headline cards ──────────────────────────────────────────
        ui.horizontal(|ui| {
            widgets::stat_card(
                ui,
                dark,
                "👥",
                "Total Employees",
                &employee_stats.total.to_string(),
                theme::accent(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "✔",
                "Present Today",
                &day_stats.present.to_string(),
                theme::success(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "⏳",
                "Pending Leave",
                &leave_stats.pending.to_string(),
                theme::warning(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🔔",
                "Unread Alerts",
                &unread.to_string(),
                theme::danger(dark),
            );
        });
        ui.add_space(theme::SECTION_SPACING);

        // ── Recent activity ─────────────────────────────────────────
        let mut goto: Option<View> = None;
        ui.columns(2, |cols| {
            // Latest leave requests
            cols[0].horizontal(|ui| {
                widgets::section_heading(ui, dark, "🌴 Recent Leave Requests");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("View all →").clicked() {
                        goto = Some(View::Leave);
                    }
                });
            });
            cols[0].add_space(4.0);
            for r in self.leave_requests.items().iter().take(RECENT_ROWS) {
                cols[0].horizontal(|ui| {
                    ui.label(RichText::new(&r.employee_name).size(12.0));
                    ui.label(
                        RichText::new(format!(
                            "{} · {} to {}",
                            r.leave_type.label(),
                            format_date(r.start_date),
                            format_date(r.end_date),
                        ))
                        .size(11.0)
                        .color(theme::text_secondary(dark)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge_pill(
                            ui,
                            r.status.label(),
                            theme::leave_status_color(r.status, dark),
                        );
                    });
                });
            }
            if self.leave_requests.is_empty() {
                cols[0].label(
                    RichText::new("No leave requests yet")
                        .size(12.0)
                        .color(theme::text_dim(dark)),
                );
            }

            // Latest notifications
            cols[1].horizontal(|ui| {
                widgets::section_heading(ui, dark, "🔔 Latest Notifications");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("View all →").clicked() {
                        goto = Some(View::Notifications);
                    }
                });
            });
            cols[1].add_space(4.0);
            let now = chrono::Utc::now();
            for n in self.notifications.items().iter().take(RECENT_ROWS) {
                cols[1].horizontal(|ui| {
                    ui.label(
                        RichText::new("●")
                            .size(10.0)
                            .color(theme::notification_kind_color(n.kind, dark)),
                    );
                    let mut title = RichText::new(&n.title).size(12.0);
                    if !n.read {
                        title = title.strong();
                    }
                    ui.label(title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_relative(n.timestamp, now))
                                .size(11.0)
                                .color(theme::text_dim(dark)),
                        );
                    });
                });
            }
            if self.notifications.is_empty() {
                cols[1].label(
                    RichText::new("No notifications")
                        .size(12.0)
                        .color(theme::text_dim(dark)),
                );
            }
        });
        if let Some(view) = goto {
            self.active_view = view;
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Department headcount ────────────────────────────────────
        widgets::section_heading(ui, dark, "🏢 Headcount by Department");
        ui.add_space(4.0);
        let tally = tally_by(self.employees.items(), |e| e.department.clone());
        let mut rows: Vec<(String, usize)> = tally.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let max = rows.first().map_or(1, |r| r.1.max(1));

        for (department, count) in rows {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [130.0, 14.0],
                    egui::Label::new(
                        RichText::new(department)
                            .size(11.0)
                            .color(theme::text_secondary(dark)),
                    ),
                );
                let width = 160.0 * (count as f32 / max as f32);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(width.max(2.0), 10.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, theme::accent_dim(dark));
                ui.label(
                    RichText::new(count.to_string())
                        .size(11.0)
                        .color(theme::text_primary(dark)),
                );
            });
        }
    }
}
