use thiserror::Error;

/// Reasons an artifact rating request is rejected.
///
/// The text-facing `parse_artifact_info` collapses all of these into an empty
/// string; callers that need to tell them apart use `rate_artifact` directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// Only fully upgraded artifacts can be rated.
    #[error("Unsupported artifact level {0}, only level 20 can be rated")]
    InvalidLevel(i64),

    /// A rated artifact carries exactly four substats.
    #[error("Expected 4 substats, got {0}")]
    WrongStatCount(usize),

    /// No roll population is configured for the stat in the requested mode.
    #[error("Unknown substat {stat} ({mode})")]
    UnknownStat { stat: String, mode: String },
}
