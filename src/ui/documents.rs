//! Documents view: library table with filters, upload dialog, version
//! history, and delete confirmation.

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::app::{DocumentDialog, StaffScopeApp, VersionDialog};
use crate::core::document::{category_names, DocumentKind, DocumentStats};
use crate::core::employee::department_names;
use crate::core::query::paginate;
use crate::core::store::new_record_id;
use crate::core::validate::{validate_document, DocumentForm};
use crate::ui::{theme, widgets};
use crate::util::time::{format_date, today};

enum RowAction {
    View(String),
    History(String),
    Delete(String),
}

impl StaffScopeApp {
    /// Render the documents view.
    pub fn render_documents_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        // ── Stat cards ──────────────────────────────────────────────
        let stats = DocumentStats::compute(self.documents.items());
        ui.horizontal(|ui| {
            widgets::stat_card(
                ui,
                dark,
                "📄",
                "Total Documents",
                &stats.total.to_string(),
                theme::accent(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "📜",
                "Policies",
                &stats.policies.to_string(),
                theme::document_kind_color(DocumentKind::Policy, dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "📋",
                "Forms",
                &stats.forms.to_string(),
                theme::document_kind_color(DocumentKind::Form, dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "📢",
                "Announcements",
                &stats.announcements.to_string(),
                theme::document_kind_color(DocumentKind::Announcement, dark),
            );
        });
        ui.add_space(theme::SECTION_SPACING);

        // ── Filter row ──────────────────────────────────────────────
        let categories = category_names(self.documents.items());
        let mut text_changed = false;
        let mut combo_changed = false;
        let mut open_upload = false;
        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.documents_view.filter.search)
                    .hint_text("Search name, description or uploader…")
                    .desired_width(240.0),
            );
            if search.changed() {
                text_changed = true;
            }
            combo_changed |= widgets::option_combo(
                ui,
                "documents_kind",
                &mut self.documents_view.filter.kind,
                &DocumentKind::ALL,
                "All Types",
                DocumentKind::label,
            );
            combo_changed |= widgets::string_combo(
                ui,
                "documents_category",
                &mut self.documents_view.filter.category,
                &categories,
                "All Categories",
            );
            if !self.documents_view.filter.is_empty()
                && ui.small_button("✖").on_hover_text("Clear filters").clicked()
            {
                self.documents_view.filter.clear();
                combo_changed = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬆ Upload").clicked() {
                    open_upload = true;
                }
            });
        });
        if text_changed {
            self.documents_view.page = 1;
            self.touch_search_filters();
        }
        if combo_changed {
            self.documents_view.page = 1;
            self.needs_refilter = true;
        }
        if open_upload {
            self.documents_view.dialog = Some(DocumentDialog {
                form: DocumentForm::default(),
                errors: Vec::new(),
            });
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Library table ───────────────────────────────────────────
        let mut action: Option<RowAction> = None;
        let resolved = paginate(
            &self.documents_view.filtered,
            self.page_size,
            self.documents_view.page,
        );
        let page_rows: Vec<usize> = resolved.items.to_vec();
        let documents = self.documents.items();
        let viewing = self.documents_view.viewing.clone();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            // Leave room for the pagination bar below the table
            .max_scroll_height((ui.available_height() - 40.0).max(120.0))
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(190.0).clip(true))
            .column(Column::auto().at_least(96.0))
            .column(Column::auto().at_least(96.0).clip(true))
            .column(Column::auto().at_least(52.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(110.0).clip(true))
            .column(Column::auto().at_least(86.0))
            .column(Column::auto().at_least(96.0).clip(true))
            .column(Column::remainder().at_least(86.0))
            .header(22.0, |mut header| {
                for title in [
                    "Name", "Type", "Category", "Version", "Size", "Uploaded By", "Modified",
                    "Audience", "Actions",
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
                    let Some(d) = documents.get(idx) else {
                        return;
                    };
                    row.set_selected(viewing.as_deref() == Some(d.id.as_str()));
                    row.col(|ui| {
                        ui.label(
                            RichText::new(d.kind.icon())
                                .color(theme::document_kind_color(d.kind, dark)),
                        );
                        ui.label(&d.name);
                    });
                    row.col(|ui| {
                        widgets::badge_pill(
                            ui,
                            d.kind.label(),
                            theme::document_kind_color(d.kind, dark),
                        );
                    });
                    row.col(|ui| {
                        ui.label(&d.category);
                    });
                    row.col(|ui| {
                        ui.label(format!("v{}", d.current_version));
                    });
                    row.col(|ui| {
                        ui.label(&d.size);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&d.uploaded_by).color(theme::text_secondary(dark)));
                    });
                    row.col(|ui| {
                        ui.label(format_date(d.last_modified));
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(d.audience_label())
                                .color(theme::text_secondary(dark)),
                        );
                    });
                    row.col(|ui| {
                        if ui.small_button("🕘").on_hover_text("Version history").clicked() {
                            action = Some(RowAction::History(d.id.clone()));
                        }
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            action = Some(RowAction::Delete(d.id.clone()));
                        }
                    });
                    if row.response().clicked() {
                        action = Some(RowAction::View(d.id.clone()));
                    }
                });
            });

        ui.add_space(6.0);
        widgets::pagination_bar(ui, dark, &mut self.documents_view.page, &resolved);

        match action {
            Some(RowAction::View(id)) => self.documents_view.viewing = Some(id),
            Some(RowAction::History(id)) => {
                self.documents_view.version_dialog = Some(VersionDialog {
                    target: id,
                    notes: String::new(),
                });
            }
            Some(RowAction::Delete(id)) => self.documents_view.confirm_delete = Some(id),
            None => {}
        }
    }

    /// Render the upload dialog, if open.
    pub fn render_document_dialog(&mut self, ctx: &egui::Context) {
        let dark = self.dark_mode;
        let departments = department_names(self.employees.items());
        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        {
            let Some(dialog) = self.documents_view.dialog.as_mut() else {
                return;
            };
            egui::Window::new("⬆ Upload Document")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .default_width(380.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::Grid::new("document_form")
                        .num_columns(2)
                        .spacing([10.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Name");
                            ui.text_edit_singleline(&mut dialog.form.name);
                            ui.end_row();

                            ui.label("Type");
                            egui::ComboBox::from_id_salt("document_form_kind")
                                .selected_text(dialog.form.kind.label())
                                .show_ui(ui, |ui| {
                                    for kind in DocumentKind::ALL {
                                        ui.selectable_value(
                                            &mut dialog.form.kind,
                                            kind,
                                            kind.label(),
                                        );
                                    }
                                });
                            ui.end_row();

                            ui.label("Category");
                            ui.text_edit_singleline(&mut dialog.form.category);
                            ui.end_row();

                            ui.label("File size");
                            ui.add(
                                egui::TextEdit::singleline(&mut dialog.form.size_label)
                                    .hint_text("e.g. 2.4 MB"),
                            );
                            ui.end_row();

                            ui.label("Description");
                            ui.add(
                                egui::TextEdit::multiline(&mut dialog.form.description)
                                    .desired_rows(2),
                            );
                            ui.end_row();
                        });

                    ui.add_space(4.0);
                    ui.checkbox(&mut dialog.form.all_departments, "Visible to all departments");
                    ui.add_enabled_ui(!dialog.form.all_departments, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for dept in &departments {
                                let mut on = dialog.form.departments.contains(dept);
                                if ui.checkbox(&mut on, dept).changed() {
                                    if on {
                                        dialog.form.departments.push(dept.clone());
                                    } else {
                                        dialog.form.departments.retain(|d| d != dept);
                                    }
                                }
                            }
                        });
                    });

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
                        if ui.button("⬆ Upload").clicked() {
                            submitted = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
        }

        if cancelled || !open {
            self.documents_view.dialog = None;
            return;
        }
        if submitted {
            if let Some(dialog) = self.documents_view.dialog.take() {
                let uploader = self.operator.clone();
                match validate_document(&dialog.form, new_record_id(), &uploader, today()) {
                    Ok(document) => self.add_document(document),
                    Err(errors) => {
                        self.documents_view.dialog = Some(DocumentDialog { errors, ..dialog });
                    }
                }
            }
        }
    }

    /// Render the read-only document detail dialog, if open.
    pub fn render_document_detail_dialog(&mut self, ctx: &egui::Context) {
        let Some(id) = self.documents_view.viewing.clone() else {
            return;
        };
        let Some(d) = self.documents.get(&id).cloned() else {
            self.documents_view.viewing = None;
            return;
        };
        let dark = self.dark_mode;
        let mut open = true;
        let mut history_clicked = false;

        egui::Window::new(format!("{} {}", d.kind.icon(), d.name))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    widgets::badge_pill(
                        ui,
                        d.kind.label(),
                        theme::document_kind_color(d.kind, dark),
                    );
                    ui.label(
                        RichText::new(format!("v{}", d.current_version))
                            .color(theme::text_secondary(dark)),
                    );
                });
                if let Some(description) = &d.description {
                    ui.add_space(4.0);
                    ui.label(description);
                }
                ui.add_space(6.0);
                egui::Grid::new("document_detail")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        let muted = theme::text_secondary(dark);
                        ui.label(RichText::new("Category").color(muted));
                        ui.label(&d.category);
                        ui.end_row();
                        ui.label(RichText::new("Size").color(muted));
                        ui.label(&d.size);
                        ui.end_row();
                        ui.label(RichText::new("Uploaded by").color(muted));
                        ui.label(&d.uploaded_by);
                        ui.end_row();
                        ui.label(RichText::new("Uploaded").color(muted));
                        ui.label(format_date(d.uploaded_at));
                        ui.end_row();
                        ui.label(RichText::new("Last modified").color(muted));
                        ui.label(format_date(d.last_modified));
                        ui.end_row();
                        ui.label(RichText::new("Audience").color(muted));
                        ui.label(d.audience_label());
                        ui.end_row();
                    });
                ui.separator();
                if ui.button("🕘 Version History").clicked() {
                    history_clicked = true;
                }
            });

        if history_clicked {
            self.documents_view.viewing = None;
            self.documents_view.version_dialog = Some(VersionDialog {
                target: id,
                notes: String::new(),
            });
        } else if !open {
            self.documents_view.viewing = None;
        }
    }

    /// Render the version-history dialog, if open. Includes the
    /// publish-new-version flow.
    pub fn render_version_dialog(&mut self, ctx: &egui::Context) {
        let dark = self.dark_mode;
        // Drop a stale dialog whose document was deleted meanwhile
        let stale = match &self.documents_view.version_dialog {
            Some(dialog) => !self.documents.contains(&dialog.target),
            None => return,
        };
        if stale {
            self.documents_view.version_dialog = None;
            return;
        }

        let mut open = true;
        let mut publish = false;
        {
            let Some(dialog) = self.documents_view.version_dialog.as_mut() else {
                return;
            };
            let Some(d) = self.documents.get(&dialog.target) else {
                return;
            };

            egui::Window::new("🕘 Version History")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .default_width(360.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(&d.name).strong());
                    ui.add_space(4.0);
                    egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                        // Newest first
                        for v in d.versions.iter().rev() {
                            ui.horizontal(|ui| {
                                let is_current = v.version == d.current_version;
                                let color = if is_current {
                                    theme::accent(dark)
                                } else {
                                    theme::text_secondary(dark)
                                };
                                ui.label(RichText::new(format!("v{}", v.version)).color(color).strong());
                                ui.label(
                                    RichText::new(format_date(v.uploaded_at))
                                        .size(11.0)
                                        .color(theme::text_dim(dark)),
                                );
                                ui.label(
                                    RichText::new(&v.uploaded_by)
                                        .size(11.0)
                                        .color(theme::text_secondary(dark)),
                                );
                                if is_current {
                                    widgets::badge_pill(ui, "current", theme::accent(dark));
                                }
                            });
                            if let Some(notes) = &v.notes {
                                ui.label(
                                    RichText::new(notes)
                                        .size(11.0)
                                        .color(theme::text_dim(dark)),
                                );
                            }
                            ui.add_space(4.0);
                        }
                    });

                    ui.separator();
                    ui.label("Publish a new version:");
                    ui.add(
                        egui::TextEdit::singleline(&mut dialog.notes)
                            .hint_text("What changed?")
                            .desired_width(f32::INFINITY),
                    );
                    if ui.button("⬆ Publish").clicked() {
                        publish = true;
                    }
                });
        }

        if publish {
            if let Some(dialog) = self.documents_view.version_dialog.take() {
                let notes = if dialog.notes.trim().is_empty() {
                    None
                } else {
                    Some(dialog.notes.trim().to_owned())
                };
                self.add_document_version(&dialog.target, notes);
            }
        } else if !open {
            self.documents_view.version_dialog = None;
        }
    }

    /// Render the delete-document confirmation, if open.
    pub fn render_document_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(id) = self.documents_view.confirm_delete.clone() else {
            return;
        };
        let name = match self.documents.get(&id) {
            Some(d) => d.name.clone(),
            None => {
                self.documents_view.confirm_delete = None;
                return;
            }
        };
        let dark = self.dark_mode;
        let mut open = true;
        let mut decided = false;
        let mut confirmed = false;

        egui::Window::new("🗑 Delete Document")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{name}\" and its version history?"));
                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("🗑 Delete").color(theme::danger(dark)))
                        .clicked()
                    {
                        decided = true;
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        decided = true;
                    }
                });
            });

        if decided {
            if confirmed {
                self.delete_document(&id);
            }
            self.documents_view.confirm_delete = None;
        } else if !open {
            self.documents_view.confirm_delete = None;
        }
    }
}
