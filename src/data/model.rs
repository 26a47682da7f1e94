use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawRecord – one untyped row as read from the CSV file
// ---------------------------------------------------------------------------

/// A row exactly as it appears in the source table: every cell is text.
/// Columns not listed here are ignored by the CSV deserializer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawRecord {
    pub brand: String,
    pub model: String,
    pub segment: String,
    pub drivetrain: String,
    pub range_km: String,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: String,
    pub efficiency_wh_per_km: String,
    pub acceleration_0_100_s: String,
    pub top_speed_kmh: String,
    pub torque_nm: String,
    pub fast_charging_power_kw_dc: String,
    pub towing_capacity_kg: String,
    pub cargo_volume_l: String,
    pub seats: String,
}

/// Column names every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "brand",
    "model",
    "segment",
    "drivetrain",
    "range_km",
    "battery_capacity_kWh",
    "efficiency_wh_per_km",
    "acceleration_0_100_s",
    "top_speed_kmh",
    "torque_nm",
    "fast_charging_power_kw_dc",
    "towing_capacity_kg",
    "cargo_volume_l",
    "seats",
];

/// Drivetrain values with a dedicated colour; anything else is still counted.
pub const CANONICAL_DRIVETRAINS: [&str; 3] = ["FWD", "RWD", "AWD"];

// ---------------------------------------------------------------------------
// Record – one normalised vehicle
// ---------------------------------------------------------------------------

/// A single vehicle after numeric coercion. `None` marks a value that was
/// empty or not a number in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub brand: String,
    pub model: String,
    pub segment: String,
    pub drivetrain: String,
    pub range_km: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    pub efficiency_wh_per_km: Option<f64>,
    pub acceleration_0_100_s: Option<f64>,
    pub top_speed_kmh: Option<f64>,
    pub torque_nm: Option<f64>,
    pub fast_charging_power_kw_dc: Option<f64>,
    pub towing_capacity_kg: Option<f64>,
    pub cargo_volume_l: Option<f64>,
    pub seats: Option<f64>,
}

impl Record {
    /// The value of `field` if it is present and finite.
    pub fn finite(&self, field: NumericField) -> Option<f64> {
        field.value(self).filter(|v| v.is_finite())
    }
}

// ---------------------------------------------------------------------------
// NumericField – the ten numeric attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    RangeKm,
    BatteryCapacityKwh,
    EfficiencyWhPerKm,
    Acceleration0To100S,
    TopSpeedKmh,
    TorqueNm,
    FastChargingPowerKwDc,
    TowingCapacityKg,
    CargoVolumeL,
    Seats,
}

impl NumericField {
    pub const ALL: [NumericField; 10] = [
        NumericField::RangeKm,
        NumericField::BatteryCapacityKwh,
        NumericField::EfficiencyWhPerKm,
        NumericField::Acceleration0To100S,
        NumericField::TopSpeedKmh,
        NumericField::TorqueNm,
        NumericField::FastChargingPowerKwDc,
        NumericField::TowingCapacityKg,
        NumericField::CargoVolumeL,
        NumericField::Seats,
    ];

    /// Column name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::RangeKm => "range_km",
            NumericField::BatteryCapacityKwh => "battery_capacity_kWh",
            NumericField::EfficiencyWhPerKm => "efficiency_wh_per_km",
            NumericField::Acceleration0To100S => "acceleration_0_100_s",
            NumericField::TopSpeedKmh => "top_speed_kmh",
            NumericField::TorqueNm => "torque_nm",
            NumericField::FastChargingPowerKwDc => "fast_charging_power_kw_dc",
            NumericField::TowingCapacityKg => "towing_capacity_kg",
            NumericField::CargoVolumeL => "cargo_volume_l",
            NumericField::Seats => "seats",
        }
    }

    /// Axis label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::RangeKm => "Range (km)",
            NumericField::BatteryCapacityKwh => "Battery Capacity (kWh)",
            NumericField::EfficiencyWhPerKm => "Efficiency (Wh/km)",
            NumericField::Acceleration0To100S => "0-100 km/h Acceleration (seconds)",
            NumericField::TopSpeedKmh => "Top Speed (km/h)",
            NumericField::TorqueNm => "Torque (Nm)",
            NumericField::FastChargingPowerKwDc => "DC Fast Charging (kW)",
            NumericField::TowingCapacityKg => "Towing Capacity (kg)",
            NumericField::CargoVolumeL => "Cargo Volume (l)",
            NumericField::Seats => "Seats",
        }
    }

    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            NumericField::RangeKm => record.range_km,
            NumericField::BatteryCapacityKwh => record.battery_capacity_kwh,
            NumericField::EfficiencyWhPerKm => record.efficiency_wh_per_km,
            NumericField::Acceleration0To100S => record.acceleration_0_100_s,
            NumericField::TopSpeedKmh => record.top_speed_kmh,
            NumericField::TorqueNm => record.torque_nm,
            NumericField::FastChargingPowerKwDc => record.fast_charging_power_kw_dc,
            NumericField::TowingCapacityKg => record.towing_capacity_kg,
            NumericField::CargoVolumeL => record.cargo_volume_l,
            NumericField::Seats => record.seats,
        }
    }

    /// The raw text cell for this field.
    pub fn raw(self, raw: &RawRecord) -> &str {
        match self {
            NumericField::RangeKm => &raw.range_km,
            NumericField::BatteryCapacityKwh => &raw.battery_capacity_kwh,
            NumericField::EfficiencyWhPerKm => &raw.efficiency_wh_per_km,
            NumericField::Acceleration0To100S => &raw.acceleration_0_100_s,
            NumericField::TopSpeedKmh => &raw.top_speed_kmh,
            NumericField::TorqueNm => &raw.torque_nm,
            NumericField::FastChargingPowerKwDc => &raw.fast_charging_power_kw_dc,
            NumericField::TowingCapacityKg => &raw.towing_capacity_kg,
            NumericField::CargoVolumeL => &raw.cargo_volume_l,
            NumericField::Seats => &raw.seats,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// EvDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The normalised dataset with the distinct values of each categorical
/// column pre-computed for the selection controls.
#[derive(Debug, Clone, Default)]
pub struct EvDataset {
    /// All vehicles, in file order.
    pub records: Vec<Record>,
    pub brands: BTreeSet<String>,
    pub segments: BTreeSet<String>,
    pub drivetrains: BTreeSet<String>,
}

impl EvDataset {
    /// Build the option lists from the normalised records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut brands = BTreeSet::new();
        let mut segments = BTreeSet::new();
        let mut drivetrains = BTreeSet::new();

        for r in &records {
            brands.insert(r.brand.clone());
            segments.insert(r.segment.clone());
            drivetrains.insert(r.drivetrain.clone());
        }

        EvDataset {
            records,
            brands,
            segments,
            drivetrains,
        }
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
