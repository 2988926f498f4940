//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Guild data
//! (members, command registration) arrives afterwards through `guild_create`.

use serenity::all::{ActivityData, Context, Ready};

/// Status shown under the bot's name.
const ACTIVITY: &str = "Counting your words";

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and the number of guilds the bot is in, and sets the
/// bot's custom status.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom(ACTIVITY)));
}
