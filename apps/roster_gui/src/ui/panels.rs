//! Panels drawn each frame from the view-model.
//!
//! Row actions capture the row's id at draw time, so nothing is looked up by
//! name once a click arrives.

use std::time::Instant;

use client_core::{
    roster::COLUMN_HEADERS,
    status::{BannerPhase, StatusBanner, StatusSeverity},
    workflow::Confirmation,
    RosterCommand, RosterViewModel,
};
use egui::{Align, Align2, Color32, Layout};

pub fn banner_colors(severity: StatusSeverity) -> (Color32, Color32) {
    match severity {
        StatusSeverity::Success => (
            Color32::from_rgb(38, 92, 58),
            Color32::from_rgb(86, 160, 112),
        ),
        StatusSeverity::Error => (
            Color32::from_rgb(111, 53, 53),
            Color32::from_rgb(175, 96, 96),
        ),
    }
}

/// Opacity of the banner for a phase; `None` means it takes no space.
pub fn banner_opacity(phase: BannerPhase) -> Option<f32> {
    match phase {
        BannerPhase::Visible => Some(1.0),
        BannerPhase::FadingOut { remaining } => Some(remaining.clamp(0.0, 1.0)),
        BannerPhase::Removed => None,
    }
}

pub fn show_status_banner(ui: &mut egui::Ui, banner: &mut StatusBanner, now: Instant) {
    let Some(opacity) = banner_opacity(banner.tick(now)) else {
        return;
    };
    let Some(message) = banner.message().cloned() else {
        return;
    };

    let (fill, stroke) = banner_colors(message.severity);
    let mut dismissed = false;
    egui::Frame::new()
        .fill(fill.gamma_multiply(opacity))
        .stroke(egui::Stroke::new(1.0, stroke.gamma_multiply(opacity)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(&message.text)
                        .color(Color32::WHITE.gamma_multiply(opacity)),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    if dismissed {
        banner.dismiss();
    }
}

/// Placeholder shown until the first fetch succeeds.
pub fn empty_state_text(load_failed: bool) -> &'static str {
    if load_failed {
        "Employees could not be loaded. Use Employee List to retry."
    } else {
        "Loading employees..."
    }
}

/// Employee table with selection checkboxes and per-row actions.
pub fn show_roster_table(ui: &mut egui::Ui, view: &mut RosterViewModel) -> Option<RosterCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.heading("Employees");
        if let Some(indicator) = view.roster.selection_indicator() {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(indicator.label()).clicked() {
                    command = view.request_batch_delete(Confirmation::Dialog);
                }
            });
        }
    });
    ui.separator();

    if !view.roster.has_loaded() {
        ui.label(empty_state_text(view.roster.load_failed()));
        return command;
    }
    if !view.roster.shows_header() {
        ui.label("No employees yet. Use the form to add one.");
        return command;
    }

    let rows = view.roster.rows().to_vec();
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("roster_table")
            .striped(true)
            .num_columns(COLUMN_HEADERS.len() + 2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                let mut all = view.roster.all_selected();
                if ui.checkbox(&mut all, "").changed() {
                    view.roster.select_all(all);
                }
                for header in COLUMN_HEADERS {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.label(egui::RichText::new("Actions").strong());
                ui.end_row();

                for employee in &rows {
                    let id = employee.id;
                    let mut checked = view.roster.is_selected(id);
                    if ui.checkbox(&mut checked, "").changed() {
                        view.roster.set_selected(id, checked);
                    }
                    ui.label(employee.fields.first_name.as_str());
                    ui.label(employee.fields.last_name.as_str());
                    ui.label(employee.fields.email.as_str());
                    ui.label(employee.fields.department.as_str());
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            command = Some(RosterCommand::Edit(id));
                        }
                        if ui.button("Delete").clicked() {
                            command = view.request_delete(id, Confirmation::Dialog);
                        }
                    });
                    ui.end_row();
                }
            });
    });

    command
}

pub fn show_employee_form(ui: &mut egui::Ui, view: &mut RosterViewModel) -> Option<RosterCommand> {
    let mut command = None;
    ui.heading(view.form.title());
    if let Some(id) = view.form.employee_id {
        ui.label(egui::RichText::new(format!("Employee #{id}")).weak());
    }
    ui.add_space(8.0);

    let fields = &mut view.form.fields;
    egui::Grid::new("employee_form")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (label, value) in [
                ("First Name", &mut fields.first_name),
                ("Last Name", &mut fields.last_name),
                ("Email", &mut fields.email),
                ("Department", &mut fields.department),
            ] {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(value).hint_text(label));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button(view.form.submit_label()).clicked() {
            command = Some(view.submit_form());
        }
        if ui.button("Reset").clicked() {
            view.reset_form();
        }
    });
    command
}

/// Modal confirmation for a pending delete.
pub fn show_confirm_dialog(
    ctx: &egui::Context,
    view: &mut RosterViewModel,
) -> Option<RosterCommand> {
    let question = view.pending_deletion()?.question();
    let mut command = None;
    let mut cancelled = false;

    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(question.as_str());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    command = view.confirm_pending();
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if cancelled {
        view.cancel_pending();
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fading_banner_keeps_layout_until_removed() {
        assert_eq!(banner_opacity(BannerPhase::Visible), Some(1.0));
        assert_eq!(
            banner_opacity(BannerPhase::FadingOut { remaining: 0.25 }),
            Some(0.25)
        );
        assert_eq!(banner_opacity(BannerPhase::Removed), None);
    }

    #[test]
    fn severities_have_distinct_fills() {
        let (success, _) = banner_colors(StatusSeverity::Success);
        let (error, _) = banner_colors(StatusSeverity::Error);
        assert_ne!(success, error);
    }

    #[test]
    fn failed_first_load_does_not_claim_to_be_loading() {
        assert_eq!(empty_state_text(false), "Loading employees...");
        assert!(!empty_state_text(true).contains("Loading"));
    }
}
