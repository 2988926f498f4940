//! Guild event handler for command registration and member tracking.
//!
//! The `guild_create` event fires on startup for every guild the bot is in, when
//! the bot joins a new guild, and when a guild becomes available after an outage.
//! Each time, the handler:
//! - Registers the slash commands for the guild
//! - Starts tracking every non-bot member not tracked yet
//!
//! Existing records are kept, so replays of the event never reset statistics.

use serenity::all::{Context, Guild, Member};

use crate::{bot::command, state::BotState};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request.
static MEMBERS_PER_REQUEST: u64 = 1000;

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// The gateway payload only carries a partial member list for large guilds, so
/// members are fetched from the API page by page until all have been retrieved.
/// If fetching fails, members from the payload are tracked instead.
///
/// # Arguments
/// - `state` - Shared bot state holding the statistics store
/// - `ctx` - Discord context for registering commands and fetching members
/// - `guild` - Guild data from Discord including a partial member list
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub async fn handle_guild_create(
    state: &BotState,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count,
    );

    match guild.id.set_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::debug!(
            "Registered {} commands for guild {}",
            commands.len(),
            guild.id
        ),
        Err(e) => tracing::error!("Failed to register commands for guild {}: {:?}", guild.id, e),
    }

    let members = match fetch_all_members(&ctx, &guild).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(
                "Failed to fetch guild {} members from API, using gateway payload: {:?}",
                guild.id,
                e
            );
            guild.members.values().cloned().collect()
        }
    };

    let user_ids = trackable_member_ids(&members);

    let tracked = {
        let mut stats = state.stats.write().await;
        user_ids.iter().filter(|id| stats.track(**id)).count()
    };

    tracing::info!(
        "Tracking {} new members of guild {} ({} candidates)",
        tracked,
        guild.name,
        user_ids.len()
    );
}

/// Fetches every member of the guild using the API's pagination.
async fn fetch_all_members(ctx: &Context, guild: &Guild) -> serenity::Result<Vec<Member>> {
    let mut all_members = Vec::new();
    let mut after: Option<u64> = None;

    loop {
        let members = ctx
            .http
            .get_guild_members(guild.id, Some(MEMBERS_PER_REQUEST), after)
            .await?;

        if members.is_empty() {
            break;
        }

        after = members.last().map(|m| m.user.id.get());
        let fetched_count = members.len();
        all_members.extend(members);

        tracing::trace!(
            "Fetched {} members for guild {} (total so far: {})",
            fetched_count,
            guild.id,
            all_members.len()
        );

        if fetched_count < MEMBERS_PER_REQUEST as usize {
            break;
        }
    }

    Ok(all_members)
}

/// IDs of the members whose statistics are collected. Bots are skipped.
pub fn trackable_member_ids<'a>(members: impl IntoIterator<Item = &'a Member>) -> Vec<u64> {
    members
        .into_iter()
        .filter(|member| !member.user.bot)
        .map(|member| member.user.id.get())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_guild, create_test_member, DEFAULT_GUILD_ID};

    #[test]
    fn skips_bot_members() {
        let guild = create_test_guild(
            DEFAULT_GUILD_ID,
            "Test Guild",
            &[
                create_test_member(1, "alice", false, &[]),
                create_test_member(2, "helper-bot", true, &[]),
                create_test_member(3, "bob", false, &[]),
            ],
        );

        let mut ids = trackable_member_ids(guild.members.values());
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_guild_has_no_members_to_track() {
        let guild = create_test_guild(DEFAULT_GUILD_ID, "Empty", &[]);

        assert!(trackable_member_ids(guild.members.values()).is_empty());
    }
}
