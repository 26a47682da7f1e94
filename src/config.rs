use std::path::PathBuf;

/// Environment variable naming the dataset to open at startup.
pub const DATA_PATH_ENV: &str = "EV_DASHBOARD_DATA";

/// Dataset opened when neither an argument nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "electric_vehicles_spec_2025.csv";

/// Startup settings for the dashboard window.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 600.0],
        }
    }
}

impl DashboardConfig {
    /// Resolve the dataset path: first CLI argument, then
    /// [`DATA_PATH_ENV`], then [`DEFAULT_DATA_PATH`].
    pub fn from_sources(arg: Option<String>, env: Option<String>) -> Self {
        let data_path = arg
            .or(env)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self {
            data_path,
            ..Default::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_sources(std::env::args().nth(1), std::env::var(DATA_PATH_ENV).ok())
    }
}
