//! Test factory for creating Serenity Message objects.

use serde_json::{json, Value};
use serenity::all::Message;

use super::{user::user_json, DEFAULT_TIMESTAMP};

/// Channel every test message is posted in.
pub const DEFAULT_CHANNEL_ID: u64 = 555555555;

/// Creates a test Serenity Message from a regular (non-bot) user.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `author_id` - Discord user ID of the author
/// - `content` - Message text
/// - `guild_id` - Guild the message was sent in, `None` for a direct message
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    author_id: u64,
    content: &str,
    guild_id: Option<u64>,
) -> Message {
    let builder = MessageBuilder::new(message_id, author_id, content);
    match guild_id {
        Some(guild_id) => builder.guild_id(guild_id).build(),
        None => builder.build(),
    }
}

/// Builder for test messages that need more than the defaults.
///
/// # Example
///
/// ```rust,ignore
/// let message = MessageBuilder::new(1, 111, "<@42> look at this")
///     .guild_id(123456789)
///     .author_roles(&[777])
///     .image_attachment("artifact.png")
///     .build();
/// ```
pub struct MessageBuilder {
    message_id: u64,
    author_id: u64,
    content: String,
    guild_id: Option<u64>,
    author_bot: bool,
    author_roles: Option<Vec<u64>>,
    attachments: Vec<Value>,
    timestamp: String,
}

impl MessageBuilder {
    pub fn new(message_id: u64, author_id: u64, content: &str) -> Self {
        Self {
            message_id,
            author_id,
            content: content.to_string(),
            guild_id: None,
            author_bot: false,
            author_roles: None,
            attachments: Vec::new(),
            timestamp: DEFAULT_TIMESTAMP.to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn author_bot(mut self, bot: bool) -> Self {
        self.author_bot = bot;
        self
    }

    /// Attaches partial member data for the author holding these roles.
    pub fn author_roles(mut self, role_ids: &[u64]) -> Self {
        self.author_roles = Some(role_ids.to_vec());
        self
    }

    /// Adds a PNG attachment.
    pub fn image_attachment(mut self, filename: &str) -> Self {
        let id = 900000000 + self.attachments.len() as u64;
        self.attachments.push(json!({
            "id": id.to_string(),
            "filename": filename,
            "size": 1024,
            "url": format!("https://cdn.discordapp.com/attachments/{}/{}", id, filename),
            "proxy_url": format!("https://media.discordapp.net/attachments/{}/{}", id, filename),
            "height": 128,
            "width": 128,
            "content_type": "image/png",
        }));
        self
    }

    /// RFC 3339 timestamp of the message.
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// # Panics
    /// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
    pub fn build(self) -> Message {
        let member = self.author_roles.map(|roles| {
            let roles: Vec<String> = roles.iter().map(|id| id.to_string()).collect();
            json!({
                "roles": roles,
                "joined_at": DEFAULT_TIMESTAMP,
                "deaf": false,
                "mute": false,
                "flags": 0,
                "pending": false,
            })
        });

        serde_json::from_value(json!({
            "id": self.message_id.to_string(),
            "channel_id": DEFAULT_CHANNEL_ID.to_string(),
            "guild_id": self.guild_id.map(|id| id.to_string()),
            "author": user_json(self.author_id, "author", self.author_bot),
            "member": member,
            "content": self.content,
            "timestamp": self.timestamp,
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": self.attachments,
            "embeds": [],
            "pinned": false,
            "type": 0,
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }
}
