//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from the few bot
//! operations that talk to Discord. Domain-specific errors live in their own
//! modules and convert into it with `#[from]`. Event handlers never bubble errors
//! up to serenity; they log them and return.

pub mod config;
pub mod rating;
pub mod resource;

use thiserror::Error;

use crate::error::{config::ConfigError, resource::ResourceError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A resource file (substat table, reply catalog) could not be loaded.
    #[error(transparent)]
    ResourceErr(#[from] ResourceError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A blocking task (proc search) panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
