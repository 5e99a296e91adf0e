use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThresholdError>;

/// Rejected sketch thresholds. Classification itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("Threshold '{name}' must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("Squarish band is empty: ({low}, {high})")]
    EmptySquarishBand { low: f64, high: f64 },

    #[error("Tall ratio ({tall}) must be below wide ratio ({wide})")]
    TallNotBelowWide { tall: f64, wide: f64 },
}
