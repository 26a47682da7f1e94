use eframe::egui::{Color32, Pos2, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoint, PlotPoints, PlotUi,
    Points,
};

use crate::color::{drivetrain_color, ColorMap, FWD_COLOR};
use crate::data::aggregate::{DashboardSummary, ScatterPoint};
use crate::data::model::{NumericField, CANONICAL_DRIVETRAINS};

/// Pointer distance (in points) within which a scatter dot counts as hovered.
const HOVER_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Scatter: range vs battery capacity
// ---------------------------------------------------------------------------

/// Range against battery capacity, one series per drivetrain.
pub fn scatter_plot(ui: &mut Ui, summary: &DashboardSummary) {
    let points = &summary.scatter;

    let response = Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(NumericField::BatteryCapacityKwh.label())
        .y_axis_label(NumericField::RangeKm.label())
        .include_x(0.0)
        .include_y(0.0)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for drivetrain in series_order(points) {
                let series: PlotPoints = points
                    .iter()
                    .filter(|p| p.drivetrain == drivetrain)
                    .map(|p| [p.battery_capacity_kwh, p.range_km])
                    .collect();
                plot_ui.points(
                    Points::new(series)
                        .name(&drivetrain)
                        .color(drivetrain_color(&drivetrain))
                        .radius(4.0)
                        .filled(true),
                );
            }
            nearest_point(plot_ui, points)
        });

    if let Some(p) = response.inner.map(|i| &points[i]) {
        response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            ui.strong(format!("{} {}", p.brand, p.model));
            ui.label(format!("Range: {} km", p.range_km));
            ui.label(format!("Battery: {} kWh", p.battery_capacity_kwh));
            ui.label(format!("Drivetrain: {}", p.drivetrain));
        });
    }
}

/// Canonical drivetrains first (so the legend is stable), then any others
/// in first-appearance order.
fn series_order(points: &[ScatterPoint]) -> Vec<String> {
    let mut order: Vec<String> = CANONICAL_DRIVETRAINS.iter().map(|d| d.to_string()).collect();
    for p in points {
        if !order.contains(&p.drivetrain) {
            order.push(p.drivetrain.clone());
        }
    }
    order
}

fn nearest_point(plot_ui: &PlotUi, points: &[ScatterPoint]) -> Option<usize> {
    let pointer: Pos2 = plot_ui.response().hover_pos()?;
    let transform = plot_ui.transform();

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let screen =
                transform.position_from_point(&PlotPoint::new(p.battery_capacity_kwh, p.range_km));
            (i, screen.distance(pointer))
        })
        .filter(|&(_, d)| d <= HOVER_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

// ---------------------------------------------------------------------------
// Bar: average efficiency by brand
// ---------------------------------------------------------------------------

/// Mean efficiency of the most represented brands, in summary order.
pub fn efficiency_bar_chart(ui: &mut Ui, summary: &DashboardSummary) {
    let bars: Vec<Bar> = summary
        .brand_efficiency
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64, b.mean_efficiency)
                .name(&b.brand)
                .width(0.6)
                .fill(FWD_COLOR)
        })
        .collect();
    let names: Vec<String> = summary.brand_efficiency.iter().map(|b| b.brand.clone()).collect();

    let chart = BarChart::new(bars)
        .color(FWD_COLOR)
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("{}\nAvg Efficiency: {:.1} Wh/km", bar.name, bar.value)
        }));

    Plot::new("efficiency_bar_chart")
        .y_axis_label(NumericField::EfficiencyWhPerKm.label())
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .include_y(0.0)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

// ---------------------------------------------------------------------------
// Box: acceleration by segment
// ---------------------------------------------------------------------------

/// Acceleration spread per segment, whiskers at min and max.
pub fn acceleration_box_plot(ui: &mut Ui, summary: &DashboardSummary, colors: &ColorMap) {
    let stats = &summary.segment_box_stats;
    let outline = Stroke::new(1.0, Color32::from_gray(0x33));

    let boxes: Vec<BoxElem> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| {
            BoxElem::new(i as f64, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
                .name(&s.segment)
                .box_width(0.6)
                .whisker_width(0.4)
                .fill(colors.color_for(&s.segment).gamma_multiply(0.7))
                .stroke(outline)
        })
        .collect();

    let names: Vec<String> = stats.iter().map(|s| s.segment.clone()).collect();
    let sizes: Vec<usize> = stats.iter().map(|s| s.values.len()).collect();

    let plot = BoxPlot::new(boxes).element_formatter(Box::new(move |elem: &BoxElem, _plot: &BoxPlot| {
        let n = sizes.get(elem.argument.round() as usize).copied().unwrap_or(0);
        let s = &elem.spread;
        format!(
            "{}\nMin: {:.1}s\nQ1: {:.1}s\nMedian: {:.1}s\nQ3: {:.1}s\nMax: {:.1}s\nModels: {n}",
            elem.name, s.lower_whisker, s.quartile1, s.median, s.quartile3, s.upper_whisker
        )
    }));

    Plot::new("acceleration_box_plot")
        .y_axis_label(NumericField::Acceleration0To100S.label())
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .include_y(0.0)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.box_plot(plot));
}

/// Category name for a grid mark sitting on an integer slot, blank otherwise.
fn category_label(names: &[String], value: f64) -> String {
    let slot = value.round();
    if (value - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    names.get(slot as usize).cloned().unwrap_or_default()
}
