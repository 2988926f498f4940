//! Test factory for creating Serenity Member objects.

use serde_json::{json, Value};
use serenity::all::Member;

use super::{user::user_json, DEFAULT_GUILD_ID, DEFAULT_TIMESTAMP};

/// JSON for a guild member of the default test guild.
pub fn member_json(user_id: u64, name: &str, bot: bool, role_ids: &[u64]) -> Value {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    json!({
        "guild_id": DEFAULT_GUILD_ID.to_string(),
        "user": user_json(user_id, name, bot),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": DEFAULT_TIMESTAMP,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    })
}

/// Creates a test Serenity Member of the default test guild.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the account is a bot
/// - `role_ids` - Roles held by the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user_id: u64, name: &str, bot: bool, role_ids: &[u64]) -> Member {
    serde_json::from_value(member_json(user_id, name, bot, role_ids))
        .expect("Failed to create test member - invalid JSON structure")
}
