use serde_json::{json, Value};

/// JSON for a Discord user as it appears inside members and messages.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the account is a bot
pub fn user_json(user_id: u64, name: &str, bot: bool) -> Value {
    json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0000",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}
