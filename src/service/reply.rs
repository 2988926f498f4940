//! Conversational replies.
//!
//! Picks what the bot says in response to a chat message. Randomness is injected
//! so callers pass `rand::rng()` in production and a seeded `StdRng` in tests.

use std::time::Duration;

use rand::{seq::IndexedRandom, Rng};

use crate::model::reply::ReplyCatalog;

/// Sent when someone mentions the bot with an image; text recognition is not available.
pub const ARTIFACT_IMAGE_REPLY: &str =
    "Sorry, I couldn't read that :(\nUse /rate to enter the artifact substats by hand.";

/// Longest time the bot shows the typing indicator before a reply.
const MAX_TYPING_SECONDS: f64 = 5.0;

/// Simulated typing speed in characters per second.
const TYPING_CHARS_PER_SECOND: f64 = 5.0;

/// Upper bound of the random pause before the bot starts typing.
const MAX_REACTION_MILLIS: u64 = 2000;

/// A reply ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Send as a reply referencing the original message instead of a plain message.
    pub as_reference: bool,
}

/// Whether `content` starts by mentioning the user `bot_id`.
pub fn mentions_bot(content: &str, bot_id: u64) -> bool {
    content.starts_with(&format!("<@{}>", bot_id)) || content.starts_with(&format!("<@!{}>", bot_id))
}

/// Random pause before the bot reacts to a message.
pub fn reaction_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.random_range(0..=MAX_REACTION_MILLIS))
}

/// How long the typing indicator is shown for `text`.
pub fn typing_duration(text: &str) -> Duration {
    let seconds = text.chars().count() as f64 / TYPING_CHARS_PER_SECOND;
    Duration::from_secs_f64(seconds.min(MAX_TYPING_SECONDS))
}

pub struct ReplyService<'a> {
    catalog: &'a ReplyCatalog,
}

impl<'a> ReplyService<'a> {
    pub fn new(catalog: &'a ReplyCatalog) -> Self {
        Self { catalog }
    }

    /// Reply to a message that mentions the bot.
    ///
    /// Checked in order: image attachment, question keyword, goodbye word; anything
    /// else is greeted. Keywords are matched case-insensitively anywhere in the text.
    ///
    /// # Returns
    /// - `Some(Reply)` - Text to send
    /// - `None` - The matching catalog entry has no answers configured
    pub fn for_mention<R: Rng + ?Sized>(
        &self,
        content: &str,
        has_image: bool,
        rng: &mut R,
    ) -> Option<Reply> {
        if has_image {
            return Some(Reply {
                text: ARTIFACT_IMAGE_REPLY.to_string(),
                as_reference: true,
            });
        }

        let content = content.to_lowercase();

        if let Some(answers) = self
            .catalog
            .questions
            .iter()
            .find(|(keyword, _)| content.contains(&keyword.to_lowercase()))
            .map(|(_, answers)| answers)
        {
            return random_reply(answers, rng);
        }

        if self
            .catalog
            .goodbyes
            .triggers
            .iter()
            .any(|word| content.contains(&word.to_lowercase()))
        {
            return random_reply(&self.catalog.goodbyes.answers, rng);
        }

        random_reply(&self.catalog.greetings.common, rng)
    }

    /// Reply to an ordinary message: a greeting when the author has been quiet long enough.
    pub fn for_message<R: Rng + ?Sized>(&self, greeting_due: bool, rng: &mut R) -> Option<Reply> {
        if !greeting_due {
            return None;
        }

        random_reply(&self.catalog.greetings.common, rng)
    }
}

/// Picks one answer; one reply in ten references the original message.
fn random_reply<R: Rng + ?Sized>(answers: &[String], rng: &mut R) -> Option<Reply> {
    let text = answers.choose(rng)?.clone();
    let as_reference = rng.random_ratio(1, 10);

    Some(Reply { text, as_reference })
}
