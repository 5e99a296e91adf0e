use thiserror::Error;

pub type Result<T> = std::result::Result<T, TuningError>;

/// Rejected matcher tuning. Resolution itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("Field weight '{field}' must be positive, got {value}")]
    NonPositiveWeight { field: &'static str, value: f64 },

    #[error("Threshold '{name}' must be within (0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("Thresholds must satisfy tight < loose <= accept (tight={tight}, loose={loose}, accept={accept})")]
    ThresholdOrder { tight: f64, loose: f64, accept: f64 },

    #[error("runner_up ({runner_up}) must be greater than tight ({tight})")]
    RunnerUpTooClose { runner_up: f64, tight: f64 },

    #[error("max_candidates must be within 2..=5, got {0}")]
    CandidateCapOutOfRange(usize),

    #[error("Penalty '{name}' must be within [0, 1), got {value}")]
    PenaltyOutOfRange { name: &'static str, value: f64 },
}
