//! Role event handlers for Discord guild roles.
//!
//! Roles carry no statistics, so these handlers only log the change for
//! diagnostics.

use serenity::all::{Context, GuildId, Role, RoleId};

/// Handles the guild_role_create event when a role is created in a guild.
pub async fn handle_guild_role_create(_ctx: Context, new: Role) {
    tracing::debug!("Created role {} in guild {}", new.name, new.guild_id);
}

/// Handles the guild_role_update event when a role is updated in a guild.
pub async fn handle_guild_role_update(_ctx: Context, _old: Option<Role>, new: Role) {
    tracing::debug!("Updated role {} in guild {}", new.name, new.guild_id);
}

/// Handles the guild_role_delete event when a role is deleted from a guild.
pub async fn handle_guild_role_delete(
    _ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    removed_role_data_if_in_cache: Option<Role>,
) {
    match removed_role_data_if_in_cache {
        Some(role) => tracing::debug!("Deleted role {} from guild {}", role.name, guild_id),
        None => tracing::debug!("Deleted role {} from guild {}", removed_role_id, guild_id),
    }
}
