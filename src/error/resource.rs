use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the static JSON resources the bot runs on.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource file could not be read from disk.
    #[error("Failed to read resource file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource file is not valid JSON for the expected shape.
    #[error("Failed to parse resource file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A roll population is empty or contains a value that is not strictly positive.
    #[error("Invalid roll population for {stat} ({mode}): {reason}")]
    InvalidPopulation {
        stat: String,
        mode: String,
        reason: String,
    },
}
