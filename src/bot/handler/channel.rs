//! Channel event handlers for Discord guild channels.
//!
//! Channels are not tracked; these handlers log channel lifecycle, pin and typing
//! events at debug level.

use serenity::all::{ChannelPinsUpdateEvent, Context, GuildChannel, Message, TypingStartEvent};

/// Handles the channel_create event when a channel is created in a guild.
pub async fn handle_channel_create(_ctx: Context, channel: GuildChannel) {
    tracing::debug!(
        "Created channel {} (type: {:?}) in guild {}",
        channel.name,
        channel.kind,
        channel.guild_id
    );
}

/// Handles the channel_update event when a channel is updated in a guild.
pub async fn handle_channel_update(_ctx: Context, _old: Option<GuildChannel>, new: GuildChannel) {
    tracing::debug!("Updated channel {} in guild {}", new.name, new.guild_id);
}

/// Handles the channel_delete event when a channel is deleted from a guild.
pub async fn handle_channel_delete(
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    tracing::debug!("Deleted channel {} from guild {}", channel.id, channel.guild_id);
}

/// Handles the channel_pins_update event when a message is pinned or unpinned.
pub async fn handle_channel_pins_update(_ctx: Context, pin: ChannelPinsUpdateEvent) {
    tracing::debug!(
        "Pins updated in channel {} (last pin: {:?})",
        pin.channel_id,
        pin.last_pin_timestamp
    );
}

/// Handles the typing_start event.
pub async fn handle_typing_start(_ctx: Context, event: TypingStartEvent) {
    tracing::trace!("User {} is typing in channel {}", event.user_id, event.channel_id);
}
