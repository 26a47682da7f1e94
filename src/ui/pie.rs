use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use crate::color::drivetrain_color;
use crate::data::aggregate::{DashboardSummary, DrivetrainCount};

/// Arc vertices per quarter turn of a wedge.
const ARC_STEPS: usize = 24;

/// One wedge of the drivetrain pie. Angles are in radians, measured
/// clockwise on screen from twelve o'clock's `-π/2`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub drivetrain: String,
    pub count: usize,
    pub percent: f64,
    pub start: f32,
    pub end: f32,
}

impl PieSlice {
    fn mid(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Lay the counts out around the circle in the order given.
pub fn pie_slices(counts: &[DrivetrainCount], total: usize) -> Vec<PieSlice> {
    let mut angle = -FRAC_PI_2;
    counts
        .iter()
        .map(|c| {
            let percent = c.share_percent(total);
            let sweep = (percent / 100.0) as f32 * TAU;
            let slice = PieSlice {
                drivetrain: c.drivetrain.clone(),
                count: c.count,
                percent,
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Index of the slice under `offset` (pointer position relative to the centre).
pub fn slice_at(slices: &[PieSlice], offset: Vec2, radius: f32) -> Option<usize> {
    if offset.length() > radius {
        return None;
    }
    let mut angle = offset.y.atan2(offset.x);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }
    slices.iter().position(|s| s.start <= angle && angle < s.end)
}

fn wedge(center: Pos2, radius: f32, start: f32, end: f32, fill: Color32) -> Vec<Shape> {
    // Split into pieces of at most a quarter turn so each stays convex.
    let sweep = end - start;
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;

    (0..pieces)
        .map(|p| {
            let a0 = start + step * p as f32;
            let mut points = Vec::with_capacity(ARC_STEPS + 2);
            points.push(center);
            for k in 0..=ARC_STEPS {
                let a = a0 + step * k as f32 / ARC_STEPS as f32;
                points.push(center + radius * Vec2::angled(a));
            }
            Shape::convex_polygon(points, fill, Stroke::NONE)
        })
        .collect()
}

/// Drivetrain share of the filtered vehicles.
pub fn drivetrain_pie_chart(ui: &mut Ui, summary: &DashboardSummary) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = 0.45 * rect.width().min(rect.height());

    if summary.total == 0 || radius <= 1.0 {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No vehicles match the filters",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let slices = pie_slices(&summary.drivetrain_counts, summary.total);
    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(&slices, pos - center, radius));

    for (i, slice) in slices.iter().enumerate() {
        let mut fill = drivetrain_color(&slice.drivetrain);
        if hovered == Some(i) {
            fill = fill.gamma_multiply(0.8);
        }
        for shape in wedge(center, radius, slice.start, slice.end, fill) {
            painter.add(shape);
        }
    }

    // Separators and labels go on top of every wedge.
    if slices.len() > 1 {
        for slice in &slices {
            painter.line_segment(
                [center, center + radius * Vec2::angled(slice.start)],
                Stroke::new(1.5, Color32::WHITE),
            );
        }
    }
    for slice in &slices {
        painter.text(
            center + 0.6 * radius * Vec2::angled(slice.mid()),
            Align2::CENTER_CENTER,
            &slice.drivetrain,
            FontId::proportional(12.0),
            Color32::WHITE,
        );
    }

    if let Some(slice) = hovered.map(|i| &slices[i]) {
        response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            ui.strong(slice.drivetrain.as_str());
            ui.label(format!("Models: {}", slice.count));
            ui.label(format!("{:.1}%", slice.percent));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts() -> Vec<DrivetrainCount> {
        vec![
            DrivetrainCount { drivetrain: "AWD".into(), count: 2 },
            DrivetrainCount { drivetrain: "FWD".into(), count: 1 },
            DrivetrainCount { drivetrain: "RWD".into(), count: 1 },
        ]
    }

    #[test]
    fn test_slices_cover_full_turn() {
        let slices = pie_slices(&counts(), 4);
        assert_eq!(slices.len(), 3);
        assert_relative_eq!(slices[0].start, -FRAC_PI_2);
        assert_relative_eq!(slices[0].end, FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(slices[2].end, -FRAC_PI_2 + TAU, epsilon = 1e-5);
        assert_relative_eq!(slices[0].percent, 50.0);
        assert_relative_eq!(slices[1].percent, 25.0);
    }

    #[test]
    fn test_slice_at() {
        let slices = pie_slices(&counts(), 4);
        // Right of centre is inside the first (top-right, clockwise) half.
        assert_eq!(slice_at(&slices, Vec2::new(10.0, 0.0), 50.0), Some(0));
        // Bottom-left quadrant belongs to the second slice.
        assert_eq!(slice_at(&slices, Vec2::new(-10.0, 10.0), 50.0), Some(1));
        // Top-left quadrant is the last slice.
        assert_eq!(slice_at(&slices, Vec2::new(-10.0, -10.0), 50.0), Some(2));
        assert_eq!(slice_at(&slices, Vec2::new(60.0, 0.0), 50.0), None);
    }

    #[test]
    fn test_wedge_pieces_are_at_most_quarter_turns() {
        let shapes = wedge(Pos2::ZERO, 10.0, 0.0, 3.0 * FRAC_PI_2 + 0.1, Color32::RED);
        assert_eq!(shapes.len(), 4);
        assert_eq!(wedge(Pos2::ZERO, 10.0, 0.0, 0.2, Color32::RED).len(), 1);
    }
}
