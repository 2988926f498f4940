//! Per-user message statistics.
//!
//! `StatsStore` owns one `UserRecord` per tracked member. Messages update the
//! author's record incrementally; `top_words` and `top_users` answer the ranking
//! queries behind `/stats` and `/top`.
//!
//! Ties in rankings are broken deterministically: words by ascending word, users
//! by ascending user ID.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::stats::UserRecord;

/// Tokens shorter than this (after cleanup) are not counted as words.
pub const MIN_WORD_CHARS: usize = 4;

/// Splits a message into countable words.
///
/// Each whitespace-separated token keeps only its alphabetic characters (punctuation,
/// digits and underscores are dropped) and is lower-cased. Tokens of three characters
/// or fewer after cleanup are discarded.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|token| {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        (word.chars().count() >= MIN_WORD_CHARS).then_some(word)
    })
}

/// Folds one message into a user's record.
///
/// Increments the message count, counts every word of `text`, and moves
/// `last_message_at` forward to `timestamp` unless a newer message was already seen.
pub fn update(record: &mut UserRecord, text: &str, timestamp: DateTime<Utc>) {
    record.message_count += 1;

    for word in tokenize(text) {
        *record.words.entry(word).or_insert(0) += 1;
    }

    record.last_message_at = record.last_message_at.max(timestamp);
}

/// The `k` most frequent words of a user, most frequent first.
pub fn top_words(record: &UserRecord, k: usize) -> Vec<(String, u64)> {
    let mut words: Vec<(&String, &u64)> = record.words.iter().collect();
    words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    words
        .into_iter()
        .take(k)
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

/// All tracked users' records, keyed by Discord user ID.
#[derive(Debug, Clone, Default)]
pub struct StatsStore {
    records: HashMap<u64, UserRecord>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a user. An existing record is left untouched.
    ///
    /// # Returns
    /// - `true` - A new record was created
    /// - `false` - The user was already tracked
    pub fn track(&mut self, user_id: u64) -> bool {
        if self.records.contains_key(&user_id) {
            return false;
        }

        self.records.insert(user_id, UserRecord::new(user_id));
        true
    }

    pub fn is_tracked(&self, user_id: u64) -> bool {
        self.records.contains_key(&user_id)
    }

    pub fn get(&self, user_id: u64) -> Option<&UserRecord> {
        self.records.get(&user_id)
    }

    pub fn get_mut(&mut self, user_id: u64) -> Option<&mut UserRecord> {
        self.records.get_mut(&user_id)
    }

    /// Counts a message for its author if the author is tracked.
    ///
    /// # Returns
    /// - `true` - The author's record was updated
    /// - `false` - The author is not tracked, nothing changed
    pub fn record_message(&mut self, user_id: u64, text: &str, timestamp: DateTime<Utc>) -> bool {
        match self.records.get_mut(&user_id) {
            Some(record) => {
                update(record, text, timestamp);
                true
            }
            None => false,
        }
    }

    /// The `k` users with the most messages, most active first.
    pub fn top_users(&self, k: usize) -> Vec<&UserRecord> {
        let mut users: Vec<&UserRecord> = self.records.values().collect();
        users.sort_by(|a, b| {
            b.message_count
                .cmp(&a.message_count)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        users.truncate(k);
        users
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
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
    fn tokenize_strips_and_discards_short_words() {
        let words: Vec<String> = tokenize("Привет мир как дела").collect();
        assert_eq!(words, vec!["привет", "дела"]);
    }

    #[test]
    fn tokenize_removes_digits_punctuation_and_underscores() {
        let words: Vec<String> = tokenize("Hello, WORLD!! snake_case 2024 abc1 x_y_z_w").collect();
        assert_eq!(words, vec!["hello", "world", "snakecase", "xyzw"]);
    }

    #[test]
    fn update_counts_message_and_words() {
        let mut record = UserRecord::new(1);

        update(&mut record, "Привет мир как дела", at(100));

        assert_eq!(record.message_count, 1);
        assert_eq!(record.words.len(), 2);
        assert_eq!(record.words.get("привет"), Some(&1));
        assert_eq!(record.words.get("дела"), Some(&1));
        assert_eq!(record.last_message_at, at(100));
    }

    #[test]
    fn update_with_only_short_words_still_counts_message() {
        let mut record = UserRecord::new(1);
        update(&mut record, "ok :) 42", at(100));

        assert_eq!(record.message_count, 1);
        assert!(record.words.is_empty());
    }

    #[test]
    fn update_order_does_not_change_aggregates() {
        let mut forward = UserRecord::new(1);
        update(&mut forward, "first message here", at(200));
        update(&mut forward, "другое сообщение", at(100));

        let mut backward = UserRecord::new(1);
        update(&mut backward, "другое сообщение", at(100));
        update(&mut backward, "first message here", at(200));

        assert_eq!(forward.message_count, backward.message_count);
        assert_eq!(forward.words, backward.words);
        assert_eq!(forward.last_message_at, at(200));
        assert_eq!(backward.last_message_at, at(200));
    }

    #[test]
    fn top_words_sorted_by_count_then_word() {
        let mut record = UserRecord::new(1);
        update(&mut record, "zebra apple apple mango mango mango", at(1));
        update(&mut record, "kiwis", at(2));

        assert_eq!(
            top_words(&record, 3),
            vec![
                ("mango".to_string(), 3),
                ("apple".to_string(), 2),
                ("kiwis".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_words_returns_all_when_fewer_than_k() {
        let mut record = UserRecord::new(1);
        update(&mut record, "alpha beta gamma delta alpha", at(1));

        let words = top_words(&record, 10);
        assert_eq!(words.len(), 4);
        assert!(words.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert!(top_words(&record, 0).is_empty());
    }

    #[test]
    fn track_keeps_existing_record() {
        let mut store = StatsStore::new();
        assert!(store.track(7));
        store.record_message(7, "hello there", at(1));

        assert!(!store.track(7));
        assert_eq!(store.get(7).map(|r| r.message_count), Some(1));
    }

    #[test]
    fn untracked_author_is_not_counted() {
        let mut store = StatsStore::new();
        assert!(!store.record_message(9, "hello there", at(1)));
        assert!(store.is_empty());
    }

    #[test]
    fn top_users_sorted_by_message_count() {
        let mut store = StatsStore::new();
        for user_id in [3, 1, 2, 4] {
            store.track(user_id);
        }
        for _ in 0..3 {
            store.record_message(2, "message", at(1));
        }
        store.record_message(3, "message", at(1));
        store.record_message(1, "message", at(1));

        let ids: Vec<u64> = store.top_users(3).iter().map(|r| r.user_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(store.top_users(10).len(), 4);
    }
}
