use std::collections::HashMap;

use super::model::{NumericField, Record};

/// How many of the most represented brands the efficiency chart shows.
pub const TOP_BRANDS: usize = 15;

// ---------------------------------------------------------------------------
// Summary types – one per chart
// ---------------------------------------------------------------------------

/// Bar-chart entry: mean efficiency of one brand.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandEfficiency {
    pub brand: String,
    pub mean_efficiency: f64,
    /// Records of this brand in the filtered set, including ones without an
    /// efficiency value.
    pub record_count: usize,
    /// Records that contributed to the mean.
    pub sample_count: usize,
}

/// Pie-chart entry: number of filtered records with this drivetrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivetrainCount {
    pub drivetrain: String,
    pub count: usize,
}

impl DrivetrainCount {
    /// Share of `total` in percent; 0 when `total` is 0.
    pub fn share_percent(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 / total as f64 * 100.0
    }
}

/// Box-plot entry: five-number summary of 0-100 km/h times for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentBoxStats {
    pub segment: String,
    /// Finite acceleration values, ascending.
    pub values: Vec<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub iqr: f64,
}

/// Scatter-chart point: battery capacity against range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub brand: String,
    pub model: String,
    pub drivetrain: String,
    pub battery_capacity_kwh: f64,
    pub range_km: f64,
}

/// Everything the four charts need for one filtered set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Size of the filtered set.
    pub total: usize,
    pub scatter: Vec<ScatterPoint>,
    pub brand_efficiency: Vec<BrandEfficiency>,
    pub drivetrain_counts: Vec<DrivetrainCount>,
    pub segment_box_stats: Vec<SegmentBoxStats>,
}

impl DashboardSummary {
    /// Run every aggregation over `records`. Nothing is carried over from a
    /// previous summary.
    pub fn compute(records: &[&Record]) -> Self {
        DashboardSummary {
            total: records.len(),
            scatter: scatter_points(records),
            brand_efficiency: brand_efficiency(records),
            drivetrain_counts: drivetrain_counts(records),
            segment_box_stats: segment_box_stats(records),
        }
    }
}

// ---------------------------------------------------------------------------
// Grouping helper
// ---------------------------------------------------------------------------

/// Group records by a key, keeping groups in first-appearance order.
fn group_by<'a, F>(records: &[&'a Record], key: F) -> Vec<(&'a str, Vec<&'a Record>)>
where
    F: Fn(&'a Record) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();

    for &r in records {
        let k = key(r);
        match index.get(k) {
            Some(&i) => groups[i].1.push(r),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![r]));
            }
        }
    }
    groups
}

/// Arithmetic mean of the finite values; `None` if there are none.
fn finite_mean(values: impl Iterator<Item = f64>) -> Option<(f64, usize)> {
    let (sum, n) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| (sum / n as f64, n))
}

// ---------------------------------------------------------------------------
// Quantiles
// ---------------------------------------------------------------------------

/// Quantile of an ascending sample by linear interpolation between the
/// order statistics at `h = (n - 1) * p`. `p` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return Some(sorted[n - 1]);
    }
    let frac = h - lo as f64;
    Some(sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac)
}

/// Five-number summary of an already cleaned, ascending sample.
fn box_stats(segment: &str, values: Vec<f64>) -> Option<SegmentBoxStats> {
    let min = *values.first()?;
    let max = *values.last()?;
    let q1 = quantile_sorted(&values, 0.25)?;
    let median = quantile_sorted(&values, 0.5)?;
    let q3 = quantile_sorted(&values, 0.75)?;

    Some(SegmentBoxStats {
        segment: segment.to_string(),
        values,
        min,
        q1,
        median,
        q3,
        max,
        iqr: q3 - q1,
    })
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Mean efficiency for the [`TOP_BRANDS`] brands with the most records,
/// presented in ascending order of the mean.
///
/// Brands are first ranked by record count (ties keep first-appearance
/// order) and cut to the top group; only then is the cut sorted by mean.
/// A selected brand without any finite efficiency value is dropped.
pub fn brand_efficiency(records: &[&Record]) -> Vec<BrandEfficiency> {
    let mut groups = group_by(records, |r| r.brand.as_str());
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups.truncate(TOP_BRANDS);

    let mut out: Vec<BrandEfficiency> = groups
        .into_iter()
        .filter_map(|(brand, members)| {
            let (mean, n) = finite_mean(
                members
                    .iter()
                    .filter_map(|r| r.finite(NumericField::EfficiencyWhPerKm)),
            )?;
            Some(BrandEfficiency {
                brand: brand.to_string(),
                mean_efficiency: mean,
                record_count: members.len(),
                sample_count: n,
            })
        })
        .collect();

    out.sort_by(|a, b| a.mean_efficiency.total_cmp(&b.mean_efficiency));
    out
}

/// Record count per drivetrain value, in first-appearance order. Every
/// record lands in exactly one group.
pub fn drivetrain_counts(records: &[&Record]) -> Vec<DrivetrainCount> {
    group_by(records, |r| r.drivetrain.as_str())
        .into_iter()
        .map(|(drivetrain, members)| DrivetrainCount {
            drivetrain: drivetrain.to_string(),
            count: members.len(),
        })
        .collect()
}

/// Acceleration box statistics per segment, ascending by median. Segments
/// without a finite acceleration value are omitted.
pub fn segment_box_stats(records: &[&Record]) -> Vec<SegmentBoxStats> {
    let mut out: Vec<SegmentBoxStats> = group_by(records, |r| r.segment.as_str())
        .into_iter()
        .filter_map(|(segment, members)| {
            let mut values: Vec<f64> = members
                .iter()
                .filter_map(|r| r.finite(NumericField::Acceleration0To100S))
                .collect();
            values.sort_by(f64::total_cmp);
            box_stats(segment, values)
        })
        .collect();

    out.sort_by(|a, b| a.median.total_cmp(&b.median));
    out
}

/// Battery/range pairs for every record where both are finite.
pub fn scatter_points(records: &[&Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|r| {
            Some(ScatterPoint {
                brand: r.brand.clone(),
                model: r.model.clone(),
                drivetrain: r.drivetrain.clone(),
                battery_capacity_kwh: r.finite(NumericField::BatteryCapacityKwh)?,
                range_km: r.finite(NumericField::RangeKm)?,
            })
        })
        .collect()
}
