//! Notifications view: filterable feed with per-item and bulk
//! mark-as-read actions.

use egui::RichText;

use crate::app::StaffScopeApp;
use crate::core::filter::ReadFilter;
use crate::core::notification::{unread_count, NotificationKind};
use crate::core::query::paginate;
use crate::ui::{theme, widgets};
use crate::util::constants::NOTIFICATION_PAGE_SIZE;
use crate::util::time::format_relative;

enum RowAction {
    MarkRead(String),
    Delete(String),
}

impl StaffScopeApp {
    /// Render the notifications view.
    pub fn render_notifications_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let now = chrono::Utc::now();
        let unread = unread_count(self.notifications.items());

        // ── Filter row ──────────────────────────────────────────────
        let mut combo_changed = false;
        let mut mark_all = false;
        ui.horizontal(|ui| {
            combo_changed |= widgets::option_combo(
                ui,
                "notifications_kind",
                &mut self.notifications_view.filter.kind,
                &NotificationKind::ALL,
                "All Types",
                NotificationKind::label,
            );
            egui::ComboBox::from_id_salt("notifications_read")
                .selected_text(self.notifications_view.filter.read.label())
                .show_ui(ui, |ui| {
                    for rf in ReadFilter::ALL {
                        if ui
                            .selectable_value(
                                &mut self.notifications_view.filter.read,
                                rf,
                                rf.label(),
                            )
                            .changed()
                        {
                            combo_changed = true;
                        }
                    }
                });
            if !self.notifications_view.filter.is_empty()
                && ui.small_button("✖").on_hover_text("Clear filters").clicked()
            {
                self.notifications_view.filter.clear();
                combo_changed = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if unread > 0 && ui.button("✔ Mark All Read").clicked() {
                    mark_all = true;
                }
            });
        });
        if combo_changed {
            self.notifications_view.page = 1;
            self.needs_refilter = true;
        }
        if mark_all {
            self.mark_all_notifications_read();
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Feed ────────────────────────────────────────────────────
        let mut action: Option<RowAction> = None;
        let resolved = paginate(
            &self.notifications_view.filtered,
            NOTIFICATION_PAGE_SIZE,
            self.notifications_view.page,
        );
        let page_rows: Vec<usize> = resolved.items.to_vec();
        let items = self.notifications.items();

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            // Leave room for the pagination bar below the feed
            .max_height((ui.available_height() - 40.0).max(120.0))
            .show(ui, |ui| {
                if page_rows.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("🔕 Nothing here")
                                .size(14.0)
                                .color(theme::text_dim(dark)),
                        );
                    });
                }
                for &idx in &page_rows {
                    let Some(n) = items.get(idx) else {
                        continue;
                    };
                    let kind_color = theme::notification_kind_color(n.kind, dark);
                    let fill = if n.read {
                        theme::card_fill(dark)
                    } else {
                        theme::accent(dark).gamma_multiply(0.08)
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("●").color(kind_color));
                                ui.vertical(|ui| {
                                    ui.horizontal(|ui| {
                                        let mut title = RichText::new(&n.title).size(13.0);
                                        if !n.read {
                                            title = title.strong();
                                        }
                                        ui.label(title);
                                        widgets::badge_pill(ui, n.kind.label(), kind_color);
                                        ui.label(
                                            RichText::new(format_relative(n.timestamp, now))
                                                .size(11.0)
                                                .color(theme::text_dim(dark)),
                                        );
                                    });
                                    ui.label(
                                        RichText::new(&n.message)
                                            .size(12.0)
                                            .color(theme::text_secondary(dark)),
                                    );
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("🗑").on_hover_text("Delete").clicked()
                                        {
                                            action = Some(RowAction::Delete(n.id.clone()));
                                        }
                                        if !n.read
                                            && ui
                                                .small_button("✔")
                                                .on_hover_text("Mark as read")
                                                .clicked()
                                        {
                                            action = Some(RowAction::MarkRead(n.id.clone()));
                                        }
                                    },
                                );
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        ui.add_space(6.0);
        widgets::pagination_bar(ui, dark, &mut self.notifications_view.page, &resolved);

        match action {
            Some(RowAction::MarkRead(id)) => self.mark_notification_read(&id),
            Some(RowAction::Delete(id)) => self.delete_notification(&id),
            None => {}
        }
    }
}
