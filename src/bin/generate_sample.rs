use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use ev_dashboard::config::DEFAULT_DATA_PATH;
use ev_dashboard::data::model::{RawRecord, REQUIRED_COLUMNS};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (brand, relative weight, efficiency offset in Wh/km)
const BRANDS: [(&str, u32, f64); 22] = [
    ("Tesla", 12, -12.0),
    ("BMW", 9, 6.0),
    ("Mercedes-Benz", 9, 14.0),
    ("Volkswagen", 8, 2.0),
    ("Audi", 7, 18.0),
    ("Hyundai", 7, -8.0),
    ("Kia", 6, -6.0),
    ("Polestar", 4, 4.0),
    ("Volvo", 4, 10.0),
    ("Nissan", 4, 0.0),
    ("Renault", 4, -10.0),
    ("Peugeot", 3, -4.0),
    ("Ford", 3, 16.0),
    ("BYD", 3, -2.0),
    ("MG", 3, 2.0),
    ("Porsche", 2, 24.0),
    ("Lucid", 2, -16.0),
    ("Fiat", 2, -14.0),
    ("Skoda", 2, 0.0),
    ("Cupra", 1, 4.0),
    ("Rivian", 1, 40.0),
    ("Lotus", 1, 30.0),
];

/// (segment, base efficiency, base 0-100 time, base battery kWh, seats)
const SEGMENTS: [(&str, f64, f64, f64, u32); 7] = [
    ("A - Mini", 135.0, 12.0, 35.0, 4),
    ("B - Small", 145.0, 9.5, 50.0, 5),
    ("C - Medium", 155.0, 7.5, 65.0, 5),
    ("D - Large", 160.0, 6.0, 80.0, 5),
    ("E - Executive", 170.0, 4.8, 95.0, 5),
    ("F - Luxury", 190.0, 4.0, 105.0, 5),
    ("N - Passenger Van", 215.0, 11.0, 75.0, 7),
];

const DRIVETRAINS: [&str; 3] = ["FWD", "RWD", "AWD"];

/// Probability that any numeric cell is written blank.
const MISSING_RATE: f64 = 0.02;

fn weighted_brand(rng: &mut SimpleRng) -> (&'static str, f64) {
    let total: u32 = BRANDS.iter().map(|b| b.1).sum();
    let mut ticket = (rng.next_u64() % total as u64) as u32;
    for &(name, weight, offset) in &BRANDS {
        if ticket < weight {
            return (name, offset);
        }
        ticket -= weight;
    }
    (BRANDS[0].0, BRANDS[0].2)
}

fn cell(rng: &mut SimpleRng, value: f64, decimals: usize) -> String {
    if rng.next_f64() < MISSING_RATE {
        String::new()
    } else {
        format!("{:.*}", decimals, value.max(0.0))
    }
}

fn generate_vehicle(rng: &mut SimpleRng, index: usize) -> RawRecord {
    let (brand, eff_offset) = weighted_brand(rng);
    let &(segment, base_eff, base_accel, base_battery, seats) = rng.pick(&SEGMENTS);
    let drivetrain = *rng.pick(&DRIVETRAINS);
    let awd = drivetrain == "AWD";

    let battery = rng.gauss(base_battery, 8.0).max(20.0);
    let efficiency = rng.gauss(base_eff + eff_offset + if awd { 10.0 } else { 0.0 }, 8.0);
    let range = battery * 1000.0 / efficiency.max(100.0);
    let accel = rng.gauss(base_accel - if awd { 1.2 } else { 0.0 }, 0.7).max(2.0);
    let torque = 600.0 / accel * 4.5;
    let charging = battery * rng.gauss(2.2, 0.4);
    let towing = rng.gauss(1200.0, 500.0);
    let cargo = rng.gauss(450.0, 120.0);

    RawRecord {
        brand: brand.to_string(),
        model: format!("{brand} E{index:03}"),
        segment: segment.to_string(),
        drivetrain: drivetrain.to_string(),
        range_km: cell(rng, range, 0),
        battery_capacity_kwh: cell(rng, battery, 1),
        efficiency_wh_per_km: cell(rng, efficiency, 0),
        acceleration_0_100_s: cell(rng, accel, 1),
        top_speed_kmh: cell(rng, 140.0 + 420.0 / accel * 4.0, 0),
        torque_nm: cell(rng, torque, 0),
        fast_charging_power_kw_dc: cell(rng, charging, 0),
        towing_capacity_kg: cell(rng, towing, 0),
        cargo_volume_l: cell(rng, cargo, 0),
        seats: cell(rng, seats as f64, 0),
    }
}

/// Write the header and `rows` synthetic vehicles. The header is written
/// explicitly so a zero-row file is still a valid, empty dataset.
fn write_sample<W: Write>(out: W, rows: usize) -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    writer
        .write_record(REQUIRED_COLUMNS)
        .context("writing header")?;
    for i in 0..rows {
        writer
            .serialize(generate_vehicle(&mut rng, i))
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}' is not a number"))?,
        None => 400,
    };

    let file = File::create(&output_path).with_context(|| format!("creating {output_path}"))?;
    write_sample(file, rows)?;

    println!("Wrote {rows} vehicles to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_dashboard::data::loader::{load_csv, read_raw_records};

    #[test]
    fn test_zero_rows_still_writes_header() {
        let mut buf = Vec::new();
        write_sample(&mut buf, 0).unwrap();

        let header = String::from_utf8(buf.clone()).unwrap();
        assert_eq!(header.trim_end(), REQUIRED_COLUMNS.join(","));
        assert!(read_raw_records(&buf[..]).unwrap().is_empty());
    }

    #[test]
    fn test_generated_rows_load_back() {
        let mut buf = Vec::new();
        write_sample(&mut buf, 5).unwrap();

        let dataset = load_csv(&buf[..]).unwrap();
        assert_eq!(dataset.len(), 5);
        assert!(!dataset.brands.is_empty());
    }
}
