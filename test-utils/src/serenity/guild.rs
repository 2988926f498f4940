//! Test factory for creating Serenity Guild objects.

use serde_json::Value;
use serenity::all::{Guild, Member};

/// Creates a test Serenity Guild with the given members.
///
/// Members are serialized back to JSON and embedded in the guild payload the way
/// the gateway delivers them in `GUILD_CREATE`. All other fields are set to
/// reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `members` - Members present in the payload
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_guild, create_test_member};
///
/// let guild = create_test_guild(123456789, "Test Guild", &[
///     create_test_member(1, "alice", false, &[]),
///     create_test_member(2, "helper-bot", true, &[]),
/// ]);
/// assert_eq!(guild.members.len(), 2);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, members: &[Member]) -> Guild {
    let members: Vec<Value> = members
        .iter()
        .map(|m| serde_json::to_value(m).expect("Failed to serialize test member"))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": members.len(),
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": members,
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
