//! Reaction event handlers.
//!
//! Reactions are logged only.

use serenity::all::{ChannelId, Context, MessageId, Reaction};

/// Handles the reaction_add event.
pub async fn handle_reaction_add(_ctx: Context, reaction: Reaction) {
    tracing::debug!(
        "User {:?} added reaction {} to message {}",
        reaction.user_id,
        reaction.emoji,
        reaction.message_id
    );
}

/// Handles the reaction_remove event.
pub async fn handle_reaction_remove(_ctx: Context, reaction: Reaction) {
    tracing::debug!(
        "User {:?} removed reaction {} from message {}",
        reaction.user_id,
        reaction.emoji,
        reaction.message_id
    );
}

/// Handles the reaction_remove_all event.
pub async fn handle_reaction_remove_all(
    _ctx: Context,
    channel_id: ChannelId,
    removed_from_message_id: MessageId,
) {
    tracing::debug!(
        "All reactions were removed from message {} in channel {}",
        removed_from_message_id,
        channel_id
    );
}

/// Handles the reaction_remove_emoji event.
pub async fn handle_reaction_remove_emoji(_ctx: Context, removed_reactions: Reaction) {
    tracing::debug!(
        "Reaction {} was cleared from message {}",
        removed_reactions.emoji,
        removed_reactions.message_id
    );
}
