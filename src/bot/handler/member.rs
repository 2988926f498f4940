use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::state::BotState;

/// Handles the guild_member_addition event when a member joins a guild
///
/// New human members start with an empty record. Bots are never tracked.
pub async fn handle_guild_member_addition(state: &BotState, _ctx: Context, new_member: Member) {
    if new_member.user.bot {
        tracing::debug!(
            "Bot {} joined guild {}, not tracking",
            new_member.user.name,
            new_member.guild_id
        );
        return;
    }

    let user_id = new_member.user.id.get();
    let created = state.stats.write().await.track(user_id);

    if created {
        tracing::info!(
            "User {} joined guild {} - tracking started",
            new_member.user.name,
            new_member.guild_id
        );
    } else {
        tracing::debug!("User {} rejoined, keeping existing record", new_member.user.name);
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
///
/// The record is kept so statistics survive a rejoin.
pub async fn handle_guild_member_removal(
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    tracing::info!("User {} left guild {}", user.name, guild_id);
}

/// Handles the guild_member_update event when a member's roles or nickname change
pub async fn handle_guild_member_update(
    _ctx: Context,
    _old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let nick = new.and_then(|m| m.nick).or(event.nick);

    tracing::debug!(
        "Member {} updated in guild {} (nick: {:?}, {} roles)",
        event.user.name,
        event.guild_id,
        nick,
        event.roles.len()
    );
}

/// Handles the guild_ban_addition event when a user is banned
pub async fn handle_guild_ban_addition(_ctx: Context, guild_id: GuildId, banned_user: User) {
    tracing::info!("User {} was banned from guild {}", banned_user.name, guild_id);
}

/// Handles the guild_ban_removal event when a user is unbanned
pub async fn handle_guild_ban_removal(_ctx: Context, guild_id: GuildId, unbanned_user: User) {
    tracing::info!("User {} was unbanned from guild {}", unbanned_user.name, guild_id);
}
