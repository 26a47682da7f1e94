use eframe::egui::{self, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{panels, pie, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EvDashboardApp {
    pub state: AppState,
}

impl EvDashboardApp {
    /// Create the app and load the configured dataset synchronously.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::default();
        state.load(&config.data_path);
        Self { state }
    }
}

impl eframe::App for EvDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 2 x 2 chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(summary) = &self.state.summary else {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("No dataset loaded  (File → Open…)");
                });
                return;
            };
            let colors = &self.state.segment_colors;

            let row_height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
            ui.columns(2, |cols| {
                chart_card(&mut cols[0], "Range vs. Battery Capacity", row_height, |ui| {
                    plot::scatter_plot(ui, summary)
                });
                chart_card(
                    &mut cols[1],
                    "Average Efficiency by Brand (Top 15)",
                    row_height,
                    |ui| plot::efficiency_bar_chart(ui, summary),
                );
            });
            ui.columns(2, |cols| {
                chart_card(&mut cols[0], "Drivetrain Distribution", row_height, |ui| {
                    pie::drivetrain_pie_chart(ui, summary)
                });
                chart_card(
                    &mut cols[1],
                    "Acceleration Performance by Segment",
                    row_height,
                    |ui| plot::acceleration_box_plot(ui, summary, colors),
                );
            });
        });
    }
}

fn chart_card(ui: &mut Ui, title: &str, height: f32, add_chart: impl FnOnce(&mut Ui)) {
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.strong(title);
        add_chart(ui);
    });
}
