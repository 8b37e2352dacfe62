//! Top toolbar: view title, quick actions, export, and theme toggle.

use crate::app::StaffScopeApp;
use crate::ui::theme;

impl StaffScopeApp {
    /// Render the top toolbar within the given `Ui` region.
    ///
    /// Contains the active view's title, the export dropdown for record
    /// views, and the right-aligned about / theme controls.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── Active view title ───────────────────────────────────
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    self.active_view.icon(),
                    self.active_view.title()
                ))
                .strong()
                .size(14.0),
            );

            ui.separator();

            // ── Export dropdown (record views only) ─────────────────
            if self.active_view_counts().is_some() {
                ui.menu_button("📤 Export", |ui| {
                    if ui.button("📄 Export to CSV...").clicked() {
                        self.export_csv();
                        ui.close_menu();
                    }
                    if ui.button("📋 Export to JSON...").clicked() {
                        self.export_json();
                        ui.close_menu();
                    }
                });

                ui.separator();

                // ── Clear filters ───────────────────────────────────
                if ui
                    .button("🧹 Clear Filters")
                    .on_hover_text("Reset every filter in this view")
                    .clicked()
                {
                    self.clear_active_filters();
                }
            }

            // ── Right-aligned app title + about + theme toggle ──────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let about_btn = ui.add(
                    egui::Button::new(egui::RichText::new("ℹ").size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if about_btn.on_hover_text("About StaffScope").clicked() {
                    self.show_about = true;
                }

                // Theme toggle
                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                let theme_tooltip = if self.dark_mode {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                };
                let theme_btn = ui.add(
                    egui::Button::new(egui::RichText::new(theme_icon).size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if theme_btn.on_hover_text(theme_tooltip).clicked() {
                    self.dark_mode = !self.dark_mode;
                    if self.dark_mode {
                        theme::apply_dark_theme(ui.ctx());
                    } else {
                        theme::apply_light_theme(ui.ctx());
                    }
                }

                ui.label(
                    egui::RichText::new("👥 StaffScope")
                        .color(theme::accent(self.dark_mode))
                        .strong()
                        .size(16.0),
                );
            });
        });
    }
}
