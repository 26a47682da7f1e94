use super::model::{NumericField, RawRecord, Record};

/// Parse a numeric cell. Empty or unparsable text becomes `None`.
pub fn coerce_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}

/// Turn one text row into a typed [`Record`]. Categorical fields are moved
/// through unchanged.
pub fn normalize_record(raw: RawRecord) -> Record {
    let num = |field: NumericField| coerce_number(field.raw(&raw));

    Record {
        range_km: num(NumericField::RangeKm),
        battery_capacity_kwh: num(NumericField::BatteryCapacityKwh),
        efficiency_wh_per_km: num(NumericField::EfficiencyWhPerKm),
        acceleration_0_100_s: num(NumericField::Acceleration0To100S),
        top_speed_kmh: num(NumericField::TopSpeedKmh),
        torque_nm: num(NumericField::TorqueNm),
        fast_charging_power_kw_dc: num(NumericField::FastChargingPowerKwDc),
        towing_capacity_kg: num(NumericField::TowingCapacityKg),
        cargo_volume_l: num(NumericField::CargoVolumeL),
        seats: num(NumericField::Seats),
        brand: raw.brand,
        model: raw.model,
        segment: raw.segment,
        drivetrain: raw.drivetrain,
    }
}

/// Normalise every row, keeping order and length.
pub fn normalize(rows: Vec<RawRecord>) -> Vec<Record> {
    rows.into_iter().map(normalize_record).collect()
}

/// Per-field count of cells that ended up missing, in [`NumericField::ALL`] order.
pub fn missing_counts(records: &[Record]) -> Vec<(NumericField, usize)> {
    NumericField::ALL
        .iter()
        .map(|&field| {
            let n = records.iter().filter(|r| field.value(r).is_none()).count();
            (field, n)
        })
        .collect()
}
