//! Per-user activity statistics.
//!
//! Records live for the lifetime of the process: they are created when a member
//! is first seen (guild scan or join) and are never evicted.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

/// Quiet period after which a regular message earns a greeting.
pub const GREETING_COOLDOWN_HOURS: i64 = 12;

/// Activity aggregates for one guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Discord ID of the user
    pub user_id: u64,
    /// Number of messages counted since the record was created.
    pub message_count: u64,
    /// Lower-cased word -> number of occurrences.
    pub words: HashMap<String, u64>,
    /// Timestamp of the newest message seen, Unix epoch when none.
    pub last_message_at: DateTime<Utc>,
    /// Start of the current voice session, if the user is in a voice channel.
    pub voice_joined_at: Option<DateTime<Utc>>,
    /// Seconds spent in voice channels over completed sessions.
    pub voice_seconds: f64,
}

impl UserRecord {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            message_count: 0,
            words: HashMap::new(),
            last_message_at: DateTime::<Utc>::UNIX_EPOCH,
            voice_joined_at: None,
            voice_seconds: 0.0,
        }
    }

    /// Whether a message at `now` comes after a long enough silence to be greeted.
    pub fn greeting_due(&self, now: DateTime<Utc>) -> bool {
        now - self.last_message_at >= Duration::hours(GREETING_COOLDOWN_HOURS)
    }

    /// Starts a voice session. A session already in progress keeps its start time.
    pub fn join_voice(&mut self, at: DateTime<Utc>) {
        if self.voice_joined_at.is_none() {
            self.voice_joined_at = Some(at);
        }
    }

    /// Closes the current voice session and adds its length to `voice_seconds`.
    ///
    /// Leaving without a recorded join is ignored; a session that would end before
    /// it started counts as zero.
    pub fn leave_voice(&mut self, at: DateTime<Utc>) {
        let Some(joined_at) = self.voice_joined_at.take() else {
            return;
        };

        let elapsed = (at - joined_at).num_milliseconds().max(0) as f64 / 1000.0;
        self.voice_seconds += elapsed;
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
    fn new_record_is_due_a_greeting() {
        let record = UserRecord::new(1);
        assert_eq!(record.last_message_at, DateTime::<Utc>::UNIX_EPOCH);
        assert!(record.greeting_due(at(1_700_000_000)));
    }

    #[test]
    fn greeting_waits_for_twelve_hours() {
        let mut record = UserRecord::new(1);
        record.last_message_at = at(1_700_000_000);

        assert!(!record.greeting_due(at(1_700_000_000 + 11 * 3600)));
        assert!(record.greeting_due(at(1_700_000_000 + 12 * 3600)));
    }

    #[test]
    fn voice_sessions_accumulate() {
        let mut record = UserRecord::new(1);

        record.join_voice(at(100));
        record.leave_voice(at(160));
        record.join_voice(at(200));
        record.leave_voice(at(230));

        assert_eq!(record.voice_seconds, 90.0);
        assert!(record.voice_joined_at.is_none());
    }

    #[test]
    fn second_join_keeps_original_start() {
        let mut record = UserRecord::new(1);

        record.join_voice(at(100));
        record.join_voice(at(150));
        record.leave_voice(at(200));

        assert_eq!(record.voice_seconds, 100.0);
    }

    #[test]
    fn leave_without_join_is_ignored() {
        let mut record = UserRecord::new(1);
        record.leave_voice(at(100));
        assert_eq!(record.voice_seconds, 0.0);
    }

    #[test]
    fn backwards_session_counts_as_zero() {
        let mut record = UserRecord::new(1);
        record.join_voice(at(200));
        record.leave_voice(at(100));
        assert_eq!(record.voice_seconds, 0.0);
    }
}
