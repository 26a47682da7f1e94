use thiserror::Error;

/// Problems that make a file unusable as a dashboard dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0} (expected .csv)")]
    UnsupportedExtension(String),

    #[error("CSV is missing required column '{0}'")]
    MissingColumn(String),

    #[error("dataset contains no rows")]
    Empty,
}
