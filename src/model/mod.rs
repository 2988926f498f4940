//! Domain models.
//!
//! Plain data types shared between the data layer (resource loading), the service
//! layer (proc evaluation, statistics, replies) and the bot layer. Nothing in here
//! knows about serenity.

pub mod artifact;
pub mod reply;
pub mod stats;
