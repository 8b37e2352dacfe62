//! Frame-by-frame update loop.
//!
//! Contains the [`eframe::App`] implementation for `StaffScopeApp`:
//! debounced re-filtering, panel layout, and the floating dialogs.

use crate::app::{StaffScopeApp, View};
use crate::util::constants;

impl eframe::App for StaffScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Process export completion messages
        self.process_export_messages();

        // 2. Debounce: re-filter after FILTER_DEBOUNCE_MS of typing inactivity
        if let Some(timer) = self.debounce_timer {
            let debounce = std::time::Duration::from_millis(constants::FILTER_DEBOUNCE_MS);
            let elapsed = timer.elapsed();
            if elapsed >= debounce {
                self.refresh_filter_caches();
                self.needs_refilter = true;
                self.debounce_timer = None;
            } else {
                ctx.request_repaint_after(debounce - elapsed);
            }
        }

        // 3. Re-filter if needed
        if self.needs_refilter {
            self.apply_filters();
        }

        // 4. Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(38.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(28.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Left navigation ─────────────────────────────────────────
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(176.0)
            .show(ctx, |ui| {
                self.render_nav_panel(ui);
            });

        // ── Central view ────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.active_view {
                View::Dashboard => self.render_dashboard_view(ui),
                View::Employees => self.render_employees_view(ui),
                View::Attendance => self.render_attendance_view(ui),
                View::Leave => self.render_leave_view(ui),
                View::Documents => self.render_documents_view(ui),
                View::Notifications => self.render_notifications_view(ui),
                View::Settings => self.render_settings_view(ui),
            }
        });

        // ── Floating popups ─────────────────────────────────────────
        self.render_about_dialog(ctx);
        self.render_employee_dialog(ctx);
        self.render_employee_detail_dialog(ctx);
        self.render_employee_delete_confirm(ctx);
        self.render_leave_dialog(ctx);
        self.render_document_dialog(ctx);
        self.render_document_detail_dialog(ctx);
        self.render_version_dialog(ctx);
        self.render_document_delete_confirm(ctx);
    }

    /// Return the clear colour used before each frame render.
    ///
    /// Matches the themed background so the GPU clear is the same
    /// colour as the app background, eliminating any flash.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        if self.dark_mode {
            crate::ui::theme::BG_DARK.to_normalized_gamma_f32()
        } else {
            crate::ui::theme::BG_LIGHT.to_normalized_gamma_f32()
        }
    }

    /// Persist user preferences to eframe storage on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
        eframe::set_value(storage, "page_size", &self.page_size);
        eframe::set_value(storage, "active_view", &self.active_view);
        eframe::set_value(storage, "operator", &self.operator);
    }
}
