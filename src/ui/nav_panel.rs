//! Left navigation panel: switches between the workspace views.

use egui::RichText;

use crate::app::{StaffScopeApp, View};
use crate::core::notification::unread_count;
use crate::ui::theme;
use crate::util::constants;

impl StaffScopeApp {
    /// Render the navigation list. One entry per [`View`], with an
    /// unread counter on the notifications entry.
    pub fn render_nav_panel(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let unread = unread_count(self.notifications.items());

        ui.add_space(8.0);
        ui.with_layout(
            egui::Layout::top_down_justified(egui::Align::LEFT),
            |ui| {
                for view in View::ALL {
                    let selected = self.active_view == view;
                    let label = match view {
                        View::Notifications if unread > 0 => {
                            format!("{} {} ({unread})", view.icon(), view.title())
                        }
                        _ => format!("{} {}", view.icon(), view.title()),
                    };
                    let mut text = RichText::new(label).size(13.0);
                    if selected {
                        text = text.color(theme::accent(dark)).strong();
                    }
                    if ui.selectable_label(selected, text).clicked() {
                        self.active_view = view;
                    }
                    ui.add_space(2.0);
                }
            },
        );

        // Version footer pinned to the bottom of the panel
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("v{}", constants::APP_VERSION))
                    .size(10.0)
                    .color(theme::text_dim(dark)),
            );
        });
    }
}
