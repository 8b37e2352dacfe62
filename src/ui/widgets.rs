//! Small reusable widgets shared by the record views.
//!
//! Stat cards, status pills, initials avatars and the pagination bar.
//! Everything here is a free function taking `&mut egui::Ui` so the
//! views stay declarative.

use egui::{Color32, RichText, Sense, Vec2};

use crate::core::query::Page;
use crate::ui::theme;

/// Fixed footprint of one stat card.
const STAT_CARD_SIZE: Vec2 = Vec2::new(172.0, 64.0);

/// Draw one summary card: a coloured value with an icon and caption.
pub fn stat_card(ui: &mut egui::Ui, dark: bool, icon: &str, title: &str, value: &str, color: Color32) {
    egui::Frame::new()
        .fill(theme::card_fill(dark))
        .stroke(egui::Stroke::new(1.0, theme::text_dim(dark).gamma_multiply(0.35)))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_size(STAT_CARD_SIZE);
            ui.set_max_width(STAT_CARD_SIZE.x);
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(20.0).color(color));
                ui.add_space(4.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(value).size(20.0).strong().color(color));
                    ui.label(
                        RichText::new(title)
                            .size(11.0)
                            .color(theme::text_secondary(dark)),
                    );
                });
            });
        });
}

/// Draw a rounded status pill: tinted background, solid text.
pub fn badge_pill(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.18))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(7, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(color).strong());
        });
}

/// Draw a circular avatar showing a person's initials.
pub fn initials_avatar(ui: &mut egui::Ui, initials: &str, color: Color32) {
    let diameter = 22.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, color.gamma_multiply(0.25));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(10.0),
        color,
    );
}

/// Heading row for a view section.
pub fn section_heading(ui: &mut egui::Ui, dark: bool, text: &str) {
    ui.label(
        RichText::new(text)
            .size(14.0)
            .strong()
            .color(theme::text_primary(dark)),
    );
}

/// Draw the pagination bar for one page of results.
///
/// `page` is the 1-based page the caller asked for; the bar shows the
/// clamped values from `resolved` and writes any navigation back into
/// `page`. Returns `true` when the user changed page.
pub fn pagination_bar<T>(ui: &mut egui::Ui, dark: bool, page: &mut usize, resolved: &Page<'_, T>) -> bool {
    let mut changed = false;
    let current = resolved.page_number;
    let total_pages = resolved.total_pages;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(if resolved.total_items == 0 {
                "No matching records".to_owned()
            } else {
                format!(
                    "Showing {}-{} of {}",
                    resolved.first_index(),
                    resolved.last_index(),
                    resolved.total_items
                )
            })
            .size(11.0)
            .color(theme::text_secondary(dark)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(current < total_pages, egui::Button::new("⏭"))
                .on_hover_text("Last page")
                .clicked()
            {
                *page = total_pages;
                changed = true;
            }
            if ui
                .add_enabled(current < total_pages, egui::Button::new("▶"))
                .on_hover_text("Next page")
                .clicked()
            {
                *page = current + 1;
                changed = true;
            }
            ui.label(
                RichText::new(format!("Page {current} of {total_pages}"))
                    .size(11.0)
                    .color(theme::text_primary(dark)),
            );
            if ui
                .add_enabled(current > 1, egui::Button::new("◀"))
                .on_hover_text("Previous page")
                .clicked()
            {
                *page = current - 1;
                changed = true;
            }
            if ui
                .add_enabled(current > 1, egui::Button::new("⏮"))
                .on_hover_text("First page")
                .clicked()
            {
                *page = 1;
                changed = true;
            }
        });
    });

    changed
}

/// Dropdown over a closed option set, with a leading "all" entry that
/// maps to `None`.
///
/// Returns `true` when the selection changed.
pub fn option_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    current: &mut Option<T>,
    choices: &[T],
    all_label: &str,
    label_of: impl Fn(T) -> &'static str,
) -> bool {
    let selected = match *current {
        Some(v) => label_of(v).to_owned(),
        None => all_label.to_owned(),
    };
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            if ui.selectable_value(current, None, all_label).changed() {
                changed = true;
            }
            for &choice in choices {
                if ui
                    .selectable_value(current, Some(choice), label_of(choice))
                    .changed()
                {
                    changed = true;
                }
            }
        });
    changed
}

/// Dropdown over a list of owned strings (departments, categories), with
/// a leading "all" entry that maps to `None`.
pub fn string_combo(
    ui: &mut egui::Ui,
    id: &str,
    current: &mut Option<String>,
    choices: &[String],
    all_label: &str,
) -> bool {
    let selected = current.clone().unwrap_or_else(|| all_label.to_owned());
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            if ui.selectable_value(current, None, all_label).changed() {
                changed = true;
            }
            for choice in choices {
                if ui
                    .selectable_value(current, Some(choice.clone()), choice)
                    .changed()
                {
                    changed = true;
                }
            }
        });
    changed
}
