use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Drivetrain colours
// ---------------------------------------------------------------------------

pub const FWD_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
pub const RWD_COLOR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const AWD_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);

/// Fixed colour for the three canonical drivetrains, grey for anything else.
pub fn drivetrain_color(drivetrain: &str) -> Color32 {
    match drivetrain {
        "FWD" => FWD_COLOR,
        "RWD" => RWD_COLOR,
        "AWD" => AWD_COLOR,
        _ => Color32::GRAY,
    }
}

// ---------------------------------------------------------------------------
// Color mapping: category value → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of a categorical column to distinct colours.
/// Built once per dataset so a segment keeps its colour across filters.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(values: &BTreeSet<String>) -> Self {
        let palette = generate_palette(values.len());
        let mapping = values.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a value, grey if it was not in the dataset.
    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(Color32::GRAY)
    }
}
