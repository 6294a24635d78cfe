use thiserror::Error;

use crate::entry::LocationId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read locations file at {path}: {source}")]
    LocationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML locations file: {0}")]
    LocationsFileParseYaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON locations file: {0}")]
    LocationsFileParseJson(#[from] serde_json::Error),

    #[error("unsupported locations file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },
}

/// A location record that cannot be admitted to the store.
///
/// These never abort a load; the offending record is skipped and reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record does not match the location schema: {0}")]
    Unreadable(String),

    #[error("record has no id")]
    MissingId,

    #[error("record {0} has no name")]
    MissingName(LocationId),

    #[error("duplicate location id {0}")]
    DuplicateId(LocationId),
}

/// A delivery-hours interval string that does not match `<days> HH:MM-HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval is empty")]
    Empty,

    #[error("interval {0:?} has no time range")]
    MissingTimeRange(String),

    #[error("unknown day {0:?}")]
    UnknownDay(String),

    #[error("invalid time {0:?}; expected HH:MM")]
    InvalidTime(String),

    #[error("invalid time range {0:?}; expected HH:MM-HH:MM")]
    InvalidTimeRange(String),
}
