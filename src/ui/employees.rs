//! Employees view: roster table with filters, profile dialog, and
//! add/edit/remove flows.

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::app::{EmployeeDialog, StaffScopeApp};
use crate::core::employee::{department_names, EmployeeStats, EmployeeStatus};
use crate::core::query::paginate;
use crate::core::store::{new_record_id, next_badge};
use crate::core::validate::{validate_employee, EmployeeForm};
use crate::ui::{theme, widgets};
use crate::util::time::format_date;

/// Row-level action picked up after the table closes its borrows.
enum RowAction {
    View(String),
    Edit(String),
    Delete(String),
}

impl StaffScopeApp {
    /// Render the employees view: stat cards, filter row, roster table
    /// and pagination.
    pub fn render_employees_view(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        // ── Stat cards ──────────────────────────────────────────────
        let stats = EmployeeStats::compute(self.employees.items());
        ui.horizontal(|ui| {
            widgets::stat_card(
                ui,
                dark,
                "👥",
                "Total Employees",
                &stats.total.to_string(),
                theme::accent(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "✔",
                "Active",
                &stats.active.to_string(),
                theme::success(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🌴",
                "On Leave",
                &stats.on_leave.to_string(),
                theme::warning(dark),
            );
            widgets::stat_card(
                ui,
                dark,
                "🏢",
                "Departments",
                &stats.departments.to_string(),
                theme::info(dark),
            );
        });
        ui.add_space(theme::SECTION_SPACING);

        // ── Filter row ──────────────────────────────────────────────
        let departments = department_names(self.employees.items());
        let mut text_changed = false;
        let mut combo_changed = false;
        let mut open_add = false;
        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.employees_view.filter.search)
                    .hint_text("Search name, email or badge…")
                    .desired_width(230.0),
            );
            if search.changed() {
                text_changed = true;
            }
            combo_changed |= widgets::string_combo(
                ui,
                "employees_department",
                &mut self.employees_view.filter.department,
                &departments,
                "All Departments",
            );
            combo_changed |= widgets::option_combo(
                ui,
                "employees_status",
                &mut self.employees_view.filter.status,
                &EmployeeStatus::ALL,
                "All Statuses",
                EmployeeStatus::label,
            );
            if !self.employees_view.filter.is_empty()
                && ui.small_button("✖").on_hover_text("Clear filters").clicked()
            {
                self.employees_view.filter.clear();
                combo_changed = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add Employee").clicked() {
                    open_add = true;
                }
            });
        });
        if text_changed {
            self.employees_view.page = 1;
            self.touch_search_filters();
        }
        if combo_changed {
            self.employees_view.page = 1;
            self.needs_refilter = true;
        }
        if open_add {
            self.open_employee_dialog(None);
        }
        ui.add_space(theme::SECTION_SPACING);

        // ── Roster table ────────────────────────────────────────────
        let mut action: Option<RowAction> = None;
        let resolved = paginate(
            &self.employees_view.filtered,
            self.page_size,
            self.employees_view.page,
        );
        let page_rows: Vec<usize> = resolved.items.to_vec();
        let employees = self.employees.items();
        let viewing = self.employees_view.viewing.clone();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            // Leave room for the pagination bar below the table
            .max_scroll_height((ui.available_height() - 40.0).max(120.0))
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(165.0).clip(true))
            .column(Column::auto().at_least(66.0))
            .column(Column::auto().at_least(170.0).clip(true))
            .column(Column::auto().at_least(105.0).clip(true))
            .column(Column::auto().at_least(130.0).clip(true))
            .column(Column::auto().at_least(84.0))
            .column(Column::auto().at_least(84.0))
            .column(Column::remainder().at_least(70.0))
            .header(22.0, |mut header| {
                for title in [
                    "Employee",
                    "Badge",
                    "Email",
                    "Department",
                    "Position",
                    "Status",
                    "Started",
                    "Actions",
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
                    let Some(e) = employees.get(idx) else {
                        return;
                    };
                    row.set_selected(viewing.as_deref() == Some(e.id.as_str()));
                    row.col(|ui| {
                        widgets::initials_avatar(ui, &e.initials(), theme::accent(dark));
                        ui.label(e.full_name());
                    });
                    row.col(|ui| {
                        ui.label(&e.badge);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&e.email).color(theme::text_secondary(dark)));
                    });
                    row.col(|ui| {
                        ui.label(&e.department);
                    });
                    row.col(|ui| {
                        ui.label(&e.position);
                    });
                    row.col(|ui| {
                        widgets::badge_pill(
                            ui,
                            e.status.label(),
                            theme::employee_status_color(e.status, dark),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format_date(e.start_date));
                    });
                    row.col(|ui| {
                        if ui.small_button("✏").on_hover_text("Edit").clicked() {
                            action = Some(RowAction::Edit(e.id.clone()));
                        }
                        if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                            action = Some(RowAction::Delete(e.id.clone()));
                        }
                    });
                    if row.response().clicked() {
                        action = Some(RowAction::View(e.id.clone()));
                    }
                });
            });

        ui.add_space(6.0);
        widgets::pagination_bar(ui, dark, &mut self.employees_view.page, &resolved);

        match action {
            Some(RowAction::View(id)) => self.employees_view.viewing = Some(id),
            Some(RowAction::Edit(id)) => self.open_employee_dialog(Some(id)),
            Some(RowAction::Delete(id)) => self.employees_view.confirm_delete = Some(id),
            None => {}
        }
    }

    /// Open the add (`target == None`) or edit dialog for an employee.
    fn open_employee_dialog(&mut self, target: Option<String>) {
        let dialog = match &target {
            None => EmployeeDialog {
                target: None,
                form: EmployeeForm {
                    badge: next_badge(self.employees.items()),
                    start_date_input: format_date(crate::util::time::today()),
                    ..EmployeeForm::default()
                },
                errors: Vec::new(),
            },
            Some(id) => match self.employees.get(id) {
                Some(e) => EmployeeDialog {
                    target: Some(id.clone()),
                    form: EmployeeForm::from_employee(e),
                    errors: Vec::new(),
                },
                None => return,
            },
        };
        self.employees_view.dialog = Some(dialog);
    }

    /// Render the add/edit-employee dialog, if open.
    pub fn render_employee_dialog(&mut self, ctx: &egui::Context) {
        let dark = self.dark_mode;
        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        {
            let Some(dialog) = self.employees_view.dialog.as_mut() else {
                return;
            };
            let editing = dialog.target.is_some();
            let title = if editing {
                "✏ Edit Employee"
            } else {
                "➕ Add Employee"
            };
            egui::Window::new(title)
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .default_width(360.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::Grid::new("employee_form")
                        .num_columns(2)
                        .spacing([10.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Badge");
                            ui.text_edit_singleline(&mut dialog.form.badge);
                            ui.end_row();

                            ui.label("First name");
                            ui.text_edit_singleline(&mut dialog.form.first_name);
                            ui.end_row();

                            ui.label("Last name");
                            ui.text_edit_singleline(&mut dialog.form.last_name);
                            ui.end_row();

                            ui.label("Email");
                            ui.text_edit_singleline(&mut dialog.form.email);
                            ui.end_row();

                            ui.label("Phone");
                            ui.text_edit_singleline(&mut dialog.form.phone);
                            ui.end_row();

                            ui.label("Department");
                            ui.text_edit_singleline(&mut dialog.form.department);
                            ui.end_row();

                            ui.label("Position");
                            ui.text_edit_singleline(&mut dialog.form.position);
                            ui.end_row();

                            ui.label("Status");
                            egui::ComboBox::from_id_salt("employee_form_status")
                                .selected_text(dialog.form.status.label())
                                .show_ui(ui, |ui| {
                                    for status in EmployeeStatus::ALL {
                                        ui.selectable_value(
                                            &mut dialog.form.status,
                                            status,
                                            status.label(),
                                        );
                                    }
                                });
                            ui.end_row();

                            ui.label("Start date");
                            ui.add(
                                egui::TextEdit::singleline(&mut dialog.form.start_date_input)
                                    .hint_text("YYYY-MM-DD"),
                            );
                            ui.end_row();
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
                        let confirm = if editing { "💾 Save" } else { "➕ Add" };
                        if ui.button(confirm).clicked() {
                            submitted = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
        }

        if cancelled || !open {
            self.employees_view.dialog = None;
            return;
        }
        if submitted {
            if let Some(dialog) = self.employees_view.dialog.take() {
                let id = dialog.target.clone().unwrap_or_else(new_record_id);
                match validate_employee(&dialog.form, id.clone()) {
                    Ok(employee) => match dialog.target {
                        Some(_) => self.update_employee(&id, employee),
                        None => self.add_employee(employee),
                    },
                    Err(errors) => {
                        // Keep the dialog open with the violations listed
                        self.employees_view.dialog = Some(EmployeeDialog { errors, ..dialog });
                    }
                }
            }
        }
    }

    /// Render the read-only profile dialog, if open.
    pub fn render_employee_detail_dialog(&mut self, ctx: &egui::Context) {
        let Some(id) = self.employees_view.viewing.clone() else {
            return;
        };
        let Some(e) = self.employees.get(&id).cloned() else {
            self.employees_view.viewing = None;
            return;
        };
        let dark = self.dark_mode;
        let mut open = true;
        let mut edit_clicked = false;

        egui::Window::new("👤 Employee Profile")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(340.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    widgets::initials_avatar(ui, &e.initials(), theme::accent(dark));
                    ui.label(RichText::new(e.full_name()).size(15.0).strong());
                    widgets::badge_pill(
                        ui,
                        e.status.label(),
                        theme::employee_status_color(e.status, dark),
                    );
                });
                ui.add_space(6.0);
                egui::Grid::new("employee_profile")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        let muted = theme::text_secondary(dark);
                        ui.label(RichText::new("Badge").color(muted));
                        ui.label(&e.badge);
                        ui.end_row();
                        ui.label(RichText::new("Email").color(muted));
                        ui.label(&e.email);
                        ui.end_row();
                        ui.label(RichText::new("Phone").color(muted));
                        ui.label(&e.phone);
                        ui.end_row();
                        ui.label(RichText::new("Department").color(muted));
                        ui.label(&e.department);
                        ui.end_row();
                        ui.label(RichText::new("Position").color(muted));
                        ui.label(&e.position);
                        ui.end_row();
                        ui.label(RichText::new("Started").color(muted));
                        ui.label(format_date(e.start_date));
                        ui.end_row();
                    });
                ui.separator();
                if ui.button("✏ Edit").clicked() {
                    edit_clicked = true;
                }
            });

        if edit_clicked {
            self.employees_view.viewing = None;
            self.open_employee_dialog(Some(id));
        } else if !open {
            self.employees_view.viewing = None;
        }
    }

    /// Render the remove-employee confirmation, if open.
    pub fn render_employee_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(id) = self.employees_view.confirm_delete.clone() else {
            return;
        };
        let name = match self.employees.get(&id) {
            Some(e) => e.full_name(),
            None => {
                self.employees_view.confirm_delete = None;
                return;
            }
        };
        let dark = self.dark_mode;
        let mut open = true;
        let mut decided = false;
        let mut confirmed = false;

        egui::Window::new("🗑 Remove Employee")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Remove {name} from the roster?"));
                ui.label(
                    RichText::new("Their attendance and leave history stays in place.")
                        .color(theme::text_dim(dark))
                        .size(11.0),
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("🗑 Remove").color(theme::danger(dark)))
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
                self.delete_employee(&id);
            }
            self.employees_view.confirm_delete = None;
        } else if !open {
            self.employees_view.confirm_delete = None;
        }
    }
}
