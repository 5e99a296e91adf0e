use intent_sketch::ThresholdError;
use intent_text::TuningError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolicyError>;

/// Failures at the session surface. Resolvers themselves never fail.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The picker answered with a name outside the prompt. Nothing is placed;
    /// a sketch that prompted stays in the ledger and is not asked about again.
    #[error("'{name}' was not among the offered components")]
    UnknownChoice { name: String },

    #[error("Invalid text tuning: {0}")]
    Tuning(#[from] TuningError),

    #[error("Invalid sketch thresholds: {0}")]
    Thresholds(#[from] ThresholdError),
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile '{name}' is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile must be a JSON object")]
    NotAnObject,

    #[error("Unknown profile fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    #[error("profile.schema_version {0} is not supported (expected 1)")]
    UnsupportedSchema(u64),

    #[error("Base profile '{0}' not bundled")]
    UnknownBase(String),

    #[error("Invalid text section of profile '{name}': {source}")]
    Text {
        name: String,
        #[source]
        source: TuningError,
    },

    #[error("Invalid sketch section of profile '{name}': {source}")]
    Sketch {
        name: String,
        #[source]
        source: ThresholdError,
    },

    #[error("Invalid placement section of profile '{name}': {reason}")]
    Placement { name: String, reason: String },

    #[error("settle_window_ms must be positive in profile '{0}'")]
    SettleWindow(String),
}
