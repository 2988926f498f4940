//! Voice state handler accumulating time spent in voice channels.

use chrono::{DateTime, Utc};
use serenity::all::{Context, VoiceState};

use crate::{model::stats::UserRecord, state::BotState};

/// Handles the voice_state_update event.
///
/// Entering a channel opens a session, leaving every channel closes it. Moving
/// between channels, muting and similar updates leave the session running.
pub async fn handle_voice_state_update(
    state: &BotState,
    _ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let user_id = new.user_id.get();
    let now = Utc::now();

    let mut stats = state.stats.write().await;
    let Some(record) = stats.get_mut(user_id) else {
        return;
    };

    apply_voice_state(record, new.channel_id.is_some(), now);

    tracing::debug!(
        "Voice state of user {}: {:?} -> {:?} ({:.0} s total)",
        user_id,
        old.and_then(|s| s.channel_id),
        new.channel_id,
        record.voice_seconds
    );
}

/// Opens or closes the voice session of `record` depending on whether the user
/// is now in a voice channel.
pub fn apply_voice_state(record: &mut UserRecord, in_channel: bool, now: DateTime<Utc>) {
    if in_channel {
        record.join_voice(now);
    } else {
        record.leave_voice(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn switching_channels_keeps_session() {
        let mut record = UserRecord::new(1);

        apply_voice_state(&mut record, true, at(0));
        apply_voice_state(&mut record, true, at(60));
        apply_voice_state(&mut record, false, at(90));

        assert_eq!(record.voice_seconds, 90.0);
        assert_eq!(record.voice_joined_at, None);
    }

    #[test]
    fn leaving_without_join_is_ignored() {
        let mut record = UserRecord::new(1);

        apply_voice_state(&mut record, false, at(100));

        assert_eq!(record.voice_seconds, 0.0);
    }
}
