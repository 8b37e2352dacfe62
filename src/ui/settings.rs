//! Settings view: appearance, table density, operator identity, and
//! demo-data controls.

use egui::RichText;

use crate::app::StaffScopeApp;
use crate::ui::{theme, widgets};
use crate::util::constants::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};

impl StaffScopeApp {
    /// Render the settings view.
    pub fn render_settings_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        widgets::section_heading(ui, dark, "🎨 Appearance");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.selectable_label(self.dark_mode, "🌙 Dark").clicked() && !self.dark_mode {
                self.dark_mode = true;
                theme::apply_dark_theme(ui.ctx());
            }
            if ui.selectable_label(!self.dark_mode, "☀ Light").clicked() && self.dark_mode {
                self.dark_mode = false;
                theme::apply_light_theme(ui.ctx());
            }
        });

        ui.add_space(theme::SECTION_SPACING);
        ui.separator();
        ui.add_space(theme::SECTION_SPACING);

        widgets::section_heading(ui, dark, "📋 Tables");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Rows per page");
            ui.add(egui::Slider::new(
                &mut self.page_size,
                MIN_PAGE_SIZE..=MAX_PAGE_SIZE,
            ));
        });
        ui.label(
            RichText::new("Applies to the employee, attendance, leave and document tables.")
                .size(11.0)
                .color(theme::text_dim(dark)),
        );

        ui.add_space(theme::SECTION_SPACING);
        ui.separator();
        ui.add_space(theme::SECTION_SPACING);

        widgets::section_heading(ui, dark, "👤 Operator");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Display name");
            ui.add(
                egui::TextEdit::singleline(&mut self.operator).desired_width(180.0),
            );
        });
        ui.label(
            RichText::new("Recorded as the reviewer on leave decisions and the uploader on documents.")
                .size(11.0)
                .color(theme::text_dim(dark)),
        );

        ui.add_space(theme::SECTION_SPACING);
        ui.separator();
        ui.add_space(theme::SECTION_SPACING);

        widgets::section_heading(ui, dark, "🗄 Data");
        ui.add_space(4.0);
        if ui
            .button("⟲ Reset Demo Data")
            .on_hover_text("Discard every in-memory change and reseed the sample records")
            .clicked()
        {
            self.reseed();
        }
        ui.label(
            RichText::new("Records live in memory only; closing the app discards changes.")
                .size(11.0)
                .color(theme::text_dim(dark)),
        );
    }
}
