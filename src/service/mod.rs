//! Business logic.
//!
//! - `artifact` - proc evaluation and artifact rating
//! - `stats` - per-user message statistics and rankings
//! - `reply` - choosing conversational replies
//!
//! Services work on domain models and return data; the bot layer decides what to
//! log and what to send to Discord.

pub mod artifact;
pub mod reply;
pub mod stats;
