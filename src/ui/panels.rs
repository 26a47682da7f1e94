use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{Choice, Selection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Any change replaces the whole selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let current = state.selection.clone();
    let mut next = current.clone();

    if let Some(c) = choice_combo(ui, "brand_filter", "Brand", &current.brand, &dataset.brands) {
        next = next.with_brand(c);
    }
    ui.add_space(6.0);
    if let Some(c) = choice_combo(ui, "segment_filter", "Segment", &current.segment, &dataset.segments) {
        next = next.with_segment(c);
    }
    ui.add_space(6.0);
    if let Some(c) = choice_combo(
        ui,
        "drivetrain_filter",
        "Drivetrain",
        &current.drivetrain,
        &dataset.drivetrains,
    ) {
        next = next.with_drivetrain(c);
    }

    ui.add_space(12.0);
    if ui
        .add_enabled(!current.is_unrestricted(), egui::Button::new("Reset filters"))
        .clicked()
    {
        next = Selection::all();
    }

    if next != current {
        state.set_selection(next);
    }
}

/// A combo box offering "All" followed by the sorted distinct values.
/// Returns the newly picked choice, if any.
fn choice_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: &Choice,
    options: &BTreeSet<String>,
) -> Option<Choice> {
    let mut picked = None;

    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_all(), "All").clicked() {
                picked = Some(Choice::All);
            }
            for value in options {
                let is_selected = matches!(current, Choice::Only(v) if v == value);
                if ui.selectable_label(is_selected, value.as_str()).clicked() {
                    picked = Some(Choice::Only(value.clone()));
                }
            }
        });

    picked.filter(|c| c != current)
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} vehicles loaded, {} visible",
                ds.len(),
                state.visible_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open EV specification data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
