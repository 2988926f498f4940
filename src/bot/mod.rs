//! Discord bot integration.
//!
//! This module wires the core services to Discord through serenity. The event
//! handler (`handler/`) reacts to gateway events: it tracks members, counts their
//! messages, talks back when mentioned and accumulates voice time. Slash commands
//! (`command/`) expose the statistics and the artifact rater.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, roles and channels
//! - `GUILD_MEMBERS` - Member joins and the member list on guild create (privileged intent)
//! - `GUILD_MESSAGES` / `MESSAGE_CONTENT` - Message text for statistics (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` / `GUILD_MESSAGE_TYPING` - Reaction and typing events
//! - `GUILD_VOICE_STATES` - Voice channel joins and leaves
//! - `GUILD_MODERATION` - Ban and unban events
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
