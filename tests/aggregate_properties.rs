use ev_dashboard::data::aggregate::{
    brand_efficiency, drivetrain_counts, quantile_sorted, segment_box_stats, DashboardSummary,
    TOP_BRANDS,
};
use ev_dashboard::data::filter::{filter_records, Selection};
use ev_dashboard::data::model::Record;
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        8 => (0.0f64..500.0).prop_map(Some),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        0usize..25,
        0usize..4,
        prop::sample::select(vec!["FWD", "RWD", "AWD", "4WD"]),
        arb_value(),
        arb_value(),
    )
        .prop_map(|(brand, segment, drivetrain, efficiency, accel)| Record {
            brand: format!("Brand{brand}"),
            segment: format!("Segment{segment}"),
            drivetrain: drivetrain.to_string(),
            efficiency_wh_per_km: efficiency,
            acceleration_0_100_s: accel,
            ..Default::default()
        })
}

/// Independent count → cut → sort computation of the efficiency bars.
fn reference_brand_means(records: &[Record]) -> Vec<(String, f64)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(b, _)| *b == r.brand) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.brand.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_BRANDS);

    let mut means: Vec<(String, f64)> = counts
        .into_iter()
        .filter_map(|(brand, _)| {
            let finite: Vec<f64> = records
                .iter()
                .filter(|r| r.brand == brand)
                .filter_map(|r| r.efficiency_wh_per_km)
                .filter(|v| v.is_finite())
                .collect();
            if finite.is_empty() {
                return None;
            }
            let sum = finite.iter().fold(0.0, |acc, v| acc + v);
            Some((brand, sum / finite.len() as f64))
        })
        .collect();
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    means
}

proptest! {
    #[test]
    fn brand_efficiency_matches_reference(records in prop::collection::vec(arb_record(), 0..300)) {
        let refs: Vec<&Record> = records.iter().collect();
        let actual: Vec<(String, f64)> = brand_efficiency(&refs)
            .into_iter()
            .map(|b| (b.brand, b.mean_efficiency))
            .collect();
        prop_assert_eq!(actual, reference_brand_means(&records));
    }

    #[test]
    fn drivetrain_counts_partition(records in prop::collection::vec(arb_record(), 0..200)) {
        let refs: Vec<&Record> = records.iter().collect();
        let total: usize = drivetrain_counts(&refs).iter().map(|c| c.count).sum();
        prop_assert_eq!(total, records.len());
    }

    #[test]
    fn brand_mean_within_finite_range(records in prop::collection::vec(arb_record(), 0..200)) {
        let refs: Vec<&Record> = records.iter().collect();
        let bars = brand_efficiency(&refs);
        prop_assert!(bars.len() <= TOP_BRANDS);
        for bar in &bars {
            let finite: Vec<f64> = records
                .iter()
                .filter(|r| r.brand == bar.brand)
                .filter_map(|r| r.efficiency_wh_per_km)
                .filter(|v| v.is_finite())
                .collect();
            let lo = finite.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(bar.mean_efficiency >= lo - 1e-9 && bar.mean_efficiency <= hi + 1e-9);
        }
        prop_assert!(bars.windows(2).all(|w| w[0].mean_efficiency <= w[1].mean_efficiency));
    }

    #[test]
    fn box_stats_are_ordered(records in prop::collection::vec(arb_record(), 0..200)) {
        let refs: Vec<&Record> = records.iter().collect();
        let stats = segment_box_stats(&refs);
        for s in &stats {
            prop_assert!(!s.values.is_empty());
            prop_assert!(s.values.iter().all(|v| v.is_finite()));
            prop_assert!(s.values.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        }
        prop_assert!(stats.windows(2).all(|w| w[0].median <= w[1].median));
    }

    #[test]
    fn summary_is_pure_and_wildcard_is_identity(records in prop::collection::vec(arb_record(), 0..100)) {
        let all: Vec<&Record> = records.iter().collect();
        let filtered = filter_records(&records, &Selection::all());
        let a = DashboardSummary::compute(&filtered);
        let b = DashboardSummary::compute(&filtered);
        let c = DashboardSummary::compute(&all);
        // NaN never reaches a summary, so PartialEq is reliable here.
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn quantiles_stay_within_sample(values in prop::collection::vec(-1e6f64..1e6, 1..50), p in 0.0f64..=1.0) {
        let mut values = values;
        values.sort_by(f64::total_cmp);
        let q = quantile_sorted(&values, p).unwrap();
        prop_assert!(q >= values[0] && q <= values[values.len() - 1]);
    }
}
