use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_RESOURCES_DIR: &str = "resources";
const DEFAULT_PROC_SEARCH_CALL_BUDGET: u64 = 2_000_000;

pub struct Config {
    pub discord_bot_token: String,

    /// Directory holding `artifacts/substats.json` and `communication.json`.
    pub resources_dir: PathBuf,

    /// Members with this role are ignored by the message handler.
    pub ignored_role_id: Option<u64>,

    /// Maximum recursive calls spent on a single proc search.
    pub proc_search_call_budget: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            resources_dir: std::env::var("RESOURCES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESOURCES_DIR)),
            ignored_role_id: optional_u64("IGNORED_ROLE_ID")?,
            proc_search_call_budget: optional_u64("PROC_SEARCH_CALL_BUDGET")?
                .unwrap_or(DEFAULT_PROC_SEARCH_CALL_BUDGET),
        })
    }
}

/// Reads an optional numeric environment variable.
///
/// # Returns
/// - `Ok(None)` - Variable is unset or empty
/// - `Ok(Some(u64))` - Variable parsed successfully
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but not a valid u64
fn optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
