/// Data layer: record types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   electric_vehicles_spec_2025.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  text → Option<f64>, once per load → EvDataset
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → predicate → Vec<&Record>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  filtered records → DashboardSummary (per chart)
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
