//! Message event handlers.
//!
//! Every guild message from a tracked member is counted, and the bot answers
//! messages that mention it as well as the first message after a long silence.

use chrono::{DateTime, Utc};
use rand::Rng;
use serenity::all::{
    ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent, ReactionType,
};

use crate::{
    model::reply::ReplyCatalog,
    service::reply::{self, Reply, ReplyService},
    state::BotState,
};

/// Reaction added to messages whose content was edited.
const EDITED_REACTION: &str = "✍️";

/// File extensions treated as images when an attachment has no content type.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    // Only guild channels count, DMs are ignored
    if message.guild_id.is_none() {
        return;
    }

    if is_ignored_author(&message, state.ignored_role_id) {
        return;
    }

    let user_id = message.author.id.get();
    let timestamp: DateTime<Utc> = message.timestamp.to_utc();

    // Greeting check and update happen under one guard so two quick messages
    // cannot both be greeted
    let (tracked, greeting_due) = {
        let mut stats = state.stats.write().await;
        let greeting_due = stats
            .get(user_id)
            .is_some_and(|record| record.greeting_due(timestamp));
        let tracked = stats.record_message(user_id, &message.content, timestamp);
        (tracked, greeting_due)
    };

    if !tracked {
        tracing::trace!("Message {} from untracked user {}", message.id, user_id);
    }

    let bot_id = ctx.cache.current_user().id.get();

    // ThreadRng is not Send, keep it out of the awaits below
    let planned = {
        let mut rng = rand::rng();
        choose_reply(&state.replies, &message, bot_id, greeting_due, &mut rng)
            .map(|reply| (reply, reply::reaction_delay(&mut rng)))
    };

    let Some((reply, delay)) = planned else {
        return;
    };

    tokio::time::sleep(delay).await;

    let typing = message.channel_id.start_typing(&ctx.http);
    tokio::time::sleep(reply::typing_duration(&reply.text)).await;
    typing.stop();

    let sent = if reply.as_reference {
        message.reply(&ctx, reply.text.as_str()).await
    } else {
        message.channel_id.say(&ctx, reply.text.as_str()).await
    };

    if let Err(e) = sent {
        tracing::error!(
            "Failed to reply to message {} in channel {}: {:?}",
            message.id,
            message.channel_id,
            e
        );
    }
}

/// Handle message edits
///
/// Reacts to the edited message when its previous content is still cached and
/// the text actually changed. Embed-only updates carry no content and are skipped.
pub async fn handle_message_update(
    ctx: Context,
    old_if_available: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let Some(old) = old_if_available else {
        return;
    };

    if old.author.bot {
        return;
    }

    let new_content = new.map(|m| m.content).or(event.content);

    if !content_changed(&old.content, new_content.as_deref()) {
        return;
    }

    if let Err(e) = event
        .channel_id
        .create_reaction(
            &ctx.http,
            event.id,
            ReactionType::Unicode(EDITED_REACTION.to_string()),
        )
        .await
    {
        tracing::error!("Failed to react to edited message {}: {:?}", event.id, e);
    }
}

/// Handle message deletion
pub async fn handle_message_delete(
    _ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    tracing::debug!(
        "Message {} deleted from channel {} (guild: {:?})",
        deleted_message_id,
        channel_id,
        guild_id
    );
}

/// Whether the bot should not react to this author at all.
///
/// Bots are always ignored, as are members holding `ignored_role_id`.
pub fn is_ignored_author(message: &Message, ignored_role_id: Option<u64>) -> bool {
    if message.author.bot {
        return true;
    }

    let (Some(role_id), Some(member)) = (ignored_role_id, message.member.as_ref()) else {
        return false;
    };

    member.roles.iter().any(|role| role.get() == role_id)
}

/// Whether any attachment of the message is an image.
pub fn has_image_attachment(message: &Message) -> bool {
    message.attachments.iter().any(|attachment| {
        match attachment.content_type.as_deref() {
            Some(content_type) => content_type.starts_with("image/"),
            None => attachment
                .filename
                .rsplit_once('.')
                .is_some_and(|(_, ext)| {
                    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                }),
        }
    })
}

/// Decides what, if anything, the bot answers to `message`.
///
/// Messages starting with a mention of the bot are answered through
/// `ReplyService::for_mention`; any other message only gets a greeting when
/// `greeting_due` holds.
pub fn choose_reply<R: Rng + ?Sized>(
    catalog: &ReplyCatalog,
    message: &Message,
    bot_id: u64,
    greeting_due: bool,
    rng: &mut R,
) -> Option<Reply> {
    let service = ReplyService::new(catalog);

    if reply::mentions_bot(&message.content, bot_id) {
        service.for_mention(&message.content, has_image_attachment(message), rng)
    } else {
        service.for_message(greeting_due, rng)
    }
}

fn content_changed(old: &str, new: Option<&str>) -> bool {
    new.is_some_and(|new| new != old)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use test_utils::{
        fixture,
        serenity::{create_test_message, MessageBuilder, DEFAULT_GUILD_ID},
    };

    use super::*;
    use crate::service::reply::ARTIFACT_IMAGE_REPLY;

    const BOT_ID: u64 = 42;
    const IGNORED_ROLE: u64 = 777;

    fn catalog() -> ReplyCatalog {
        serde_json::from_value(fixture::reply::catalog()).unwrap()
    }

    #[test]
    fn bots_are_ignored() {
        let message = MessageBuilder::new(1, 2, "beep")
            .guild_id(DEFAULT_GUILD_ID)
            .author_bot(true)
            .build();

        assert!(is_ignored_author(&message, None));
    }

    #[test]
    fn members_with_ignored_role_are_ignored() {
        let with_role = MessageBuilder::new(1, 2, "hello")
            .guild_id(DEFAULT_GUILD_ID)
            .author_roles(&[1, IGNORED_ROLE])
            .build();
        let without_role = MessageBuilder::new(2, 3, "hello")
            .guild_id(DEFAULT_GUILD_ID)
            .author_roles(&[1])
            .build();

        assert!(is_ignored_author(&with_role, Some(IGNORED_ROLE)));
        assert!(!is_ignored_author(&without_role, Some(IGNORED_ROLE)));
        assert!(!is_ignored_author(&with_role, None));
    }

    #[test]
    fn detects_image_attachments() {
        let plain = create_test_message(1, 2, "no files", Some(DEFAULT_GUILD_ID));
        let with_image = MessageBuilder::new(2, 2, "look")
            .image_attachment("artifact.png")
            .build();

        assert!(!has_image_attachment(&plain));
        assert!(has_image_attachment(&with_image));
    }

    #[test]
    fn mention_with_image_suggests_rate() {
        let catalog = catalog();
        let message = MessageBuilder::new(1, 2, "<@42> rate this")
            .guild_id(DEFAULT_GUILD_ID)
            .image_attachment("artifact.png")
            .build();
        let mut rng = StdRng::seed_from_u64(3);

        let reply = choose_reply(&catalog, &message, BOT_ID, false, &mut rng);

        assert_eq!(reply.map(|r| r.text), Some(ARTIFACT_IMAGE_REPLY.to_string()));
    }

    #[test]
    fn mention_answers_question() {
        let catalog = catalog();
        let message = create_test_message(1, 2, "<@!42> How are you?", Some(DEFAULT_GUILD_ID));
        let mut rng = StdRng::seed_from_u64(3);

        let reply = choose_reply(&catalog, &message, BOT_ID, false, &mut rng);

        assert_eq!(reply.map(|r| r.text), Some("Great, thanks!".to_string()));
    }

    #[test]
    fn plain_message_greeted_only_when_due() {
        let catalog = catalog();
        let message = create_test_message(1, 2, "morning everyone", Some(DEFAULT_GUILD_ID));
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(choose_reply(&catalog, &message, BOT_ID, false, &mut rng), None);
        assert_eq!(
            choose_reply(&catalog, &message, BOT_ID, true, &mut rng).map(|r| r.text),
            Some("Hello!".to_string())
        );
    }

    #[test]
    fn edit_detection_needs_new_content() {
        assert!(content_changed("hello", Some("hello!")));
        assert!(!content_changed("hello", Some("hello")));
        assert!(!content_changed("hello", None));
    }
}
