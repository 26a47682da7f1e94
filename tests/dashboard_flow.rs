use std::io::Write;

use approx::assert_relative_eq;
use ev_dashboard::data::aggregate::{DashboardSummary, TOP_BRANDS};
use ev_dashboard::data::filter::{filter_records, Choice, Selection};
use ev_dashboard::data::loader::load_file;
use ev_dashboard::state::AppState;

const HEADER: &str = "brand,model,segment,drivetrain,range_km,battery_capacity_kWh,\
efficiency_wh_per_km,acceleration_0_100_s,top_speed_kmh,torque_nm,\
fast_charging_power_kw_dc,towing_capacity_kg,cargo_volume_l,seats";

/// Write `rows` under the standard header into a temporary `.csv` file.
fn write_csv(rows: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn row(brand: &str, segment: &str, drivetrain: &str, efficiency: &str, accel: &str) -> String {
    format!("{brand},{brand} X,{segment},{drivetrain},400,70,{efficiency},{accel},180,400,150,1000,450,5")
}

fn scenario_rows() -> Vec<String> {
    vec![
        row("Fiat", "Hatchback", "FWD", "140", "7.0"),
        row("Fiat", "Hatchback", "FWD", "150", "7.0"),
        row("Mini", "Hatchback", "FWD", "", "9.0"),
        row("Mini", "Hatchback", "AWD", "160", "11.0"),
        row("Tesla", "Sedan", "RWD", "130", "5.0"),
        row("Tesla", "Sedan", "AWD", "bad", "6.0"),
        row("Tesla", "Sedan", "AWD", "150", "not-timed"),
    ]
}

#[test]
fn test_load_filter_aggregate_end_to_end() {
    let file = write_csv(&scenario_rows());
    let ds = load_file(file.path()).unwrap();
    assert_eq!(ds.len(), 7);

    let all = filter_records(&ds.records, &Selection::all());
    let summary = DashboardSummary::compute(&all);

    // Box plot: Sedan (median 5.5) before Hatchback (median 8.0).
    let segments: Vec<&str> = summary.segment_box_stats.iter().map(|s| s.segment.as_str()).collect();
    assert_eq!(segments, ["Sedan", "Hatchback"]);
    let hatch = &summary.segment_box_stats[1];
    assert_relative_eq!(hatch.q1, 7.0);
    assert_relative_eq!(hatch.median, 8.0);
    assert_relative_eq!(hatch.q3, 9.5);
    assert_relative_eq!(hatch.max, 11.0);
    let sedan = &summary.segment_box_stats[0];
    assert_eq!(sedan.values, vec![5.0, 6.0]);
    assert_relative_eq!(sedan.q1, 5.25);
    assert_relative_eq!(sedan.q3, 5.75);

    // Bar chart: unparsable efficiencies are left out of the means.
    let bars: Vec<(&str, f64)> = summary
        .brand_efficiency
        .iter()
        .map(|b| (b.brand.as_str(), b.mean_efficiency))
        .collect();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].0, "Tesla");
    assert_relative_eq!(bars[0].1, 140.0);
    assert_eq!(bars[1].0, "Fiat");
    assert_relative_eq!(bars[1].1, 145.0);
    assert_eq!(bars[2].0, "Mini");
    assert_relative_eq!(bars[2].1, 160.0);

    // Pie chart: counts partition the filtered set.
    let total: usize = summary.drivetrain_counts.iter().map(|c| c.count).sum();
    assert_eq!(total, summary.total);
    assert_eq!(summary.scatter.len(), 7);
}

#[test]
fn test_app_state_selection_cycle() {
    let file = write_csv(&scenario_rows());
    let mut state = AppState::default();
    state.load(file.path());
    assert!(state.status_message.is_none());
    assert_eq!(state.visible_count(), 7);

    state.set_selection(Selection::all().with_drivetrain(Choice::Only("AWD".into())));
    let summary = state.summary.clone().unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.drivetrain_counts.len(), 1);
    assert_eq!(summary.drivetrain_counts[0].count, 3);

    state.set_selection(
        Selection::all()
            .with_segment(Choice::Only("Sedan".into()))
            .with_drivetrain(Choice::Only("FWD".into())),
    );
    let empty = state.summary.clone().unwrap();
    assert_eq!(empty.total, 0);
    assert!(empty.brand_efficiency.is_empty());
    assert!(empty.drivetrain_counts.is_empty());
    assert!(empty.segment_box_stats.is_empty());

    state.set_selection(Selection::all());
    let ds = state.dataset.as_ref().unwrap();
    let all: Vec<_> = ds.records.iter().collect();
    assert_eq!(state.summary.as_ref().unwrap(), &DashboardSummary::compute(&all));
}

#[test]
fn test_top_brands_by_count_not_by_mean() {
    // 20 brands with distinct counts; efficiency is shuffled against count.
    let mean_rank = |i: usize| (i * 7) % 20;
    let mut rows = Vec::new();
    for i in 0..20 {
        let efficiency = format!("{}", 120 + mean_rank(i) * 4);
        for _ in 0..(i + 1) {
            rows.push(row(&format!("Brand{i:02}"), "SUV", "AWD", &efficiency, "6.0"));
        }
    }
    let file = write_csv(&rows);
    let mut state = AppState::default();
    state.load(file.path());

    let bars = &state.summary.as_ref().unwrap().brand_efficiency;
    assert_eq!(bars.len(), TOP_BRANDS);
    let names: Vec<&str> = bars.iter().map(|b| b.brand.as_str()).collect();
    let mut most_represented: Vec<usize> = (5..20).collect();
    most_represented.sort_by_key(|&i| mean_rank(i));
    let expected: Vec<String> = most_represented
        .iter()
        .map(|i| format!("Brand{i:02}"))
        .collect();
    assert_eq!(names, expected);
    assert!(bars.windows(2).all(|w| w[0].mean_efficiency <= w[1].mean_efficiency));

    // The 15 lowest-mean brands would include Brand00 and drop Brand05;
    // the 15 highest-mean brands would drop Brand06.
    assert!(!names.contains(&"Brand00"));
    assert!(names.contains(&"Brand05"));
    assert!(names.contains(&"Brand06"));
}

#[test]
fn test_failed_load_keeps_dashboard_empty() {
    let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let mut state = AppState::default();
    state.load(file.path());
    assert!(state.dataset.is_none());
    assert!(state.summary.is_none());
    assert!(state.status_message.is_some());
}
