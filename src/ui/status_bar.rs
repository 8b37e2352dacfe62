//! Bottom status bar: record counts, action feedback, and export status.

use crate::app::StaffScopeApp;
use crate::ui::theme;

impl StaffScopeApp {
    /// Render the status bar at the bottom of the window.
    ///
    /// Shows: filtered/total counts | last action | export feedback.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            // ── Record count for the active view ────────────────────
            if let Some((filtered, total, noun)) = self.active_view_counts() {
                let count_text = if filtered == total {
                    format!("{total} {noun}")
                } else {
                    format!("Showing {filtered} of {total} {noun}")
                };
                ui.label(egui::RichText::new(count_text).color(theme::text_secondary(dark)));
                ui.separator();
            }

            // ── Last action ─────────────────────────────────────────
            ui.label(egui::RichText::new(&self.status_text).color(theme::text_dim(dark)));

            // ── Export feedback ─────────────────────────────────────
            if let Some((msg, _)) = &self.export_message {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if msg.starts_with("Export failed") {
                        theme::danger(dark)
                    } else {
                        theme::success(dark)
                    };
                    ui.label(egui::RichText::new(msg).color(color));
                });
            }
        });
    }
}
