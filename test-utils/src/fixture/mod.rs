//! Test fixtures providing reusable resource data.
//!
//! Fixtures return plain `serde_json::Value`s shaped like the bot's resource
//! files. Pass them to `TestBuilder` to write them to disk, or tweak them first
//! to produce invalid variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let substats = fixture::substat::table();
//! let replies = fixture::reply::catalog();
//! ```

pub mod reply;
pub mod substat;
