//! Text rendering for command replies.

use crate::model::{artifact::EvaluationResult, stats::UserRecord};

/// Renders a duration the way `/stats` shows voice time.
///
/// `"<s> s"` under a minute, `"<m> min <s> s"` under an hour, `"<h> h <m> min"` otherwise.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours == 0 && minutes == 0 {
        format!("{} s", seconds)
    } else if hours == 0 {
        format!("{} min {} s", minutes, seconds)
    } else {
        format!("{} h {} min", hours, minutes)
    }
}

/// One `"<stat>: <count> rolls"` line per evaluated stat.
pub fn format_evaluation(result: &EvaluationResult) -> String {
    result
        .iter()
        .map(|(stat, count)| format!("{}: {} rolls", stat, count.rolls()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered word list, `"<n>. <word> (<count> times)"` per line.
pub fn format_top_words(words: &[(String, u64)]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, (word, count))| format!("{}. {} ({} times)", i + 1, word, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered leaderboard, `"<n>. <@id>: <messages>"` per line.
pub fn format_top_users(users: &[&UserRecord]) -> String {
    users
        .iter()
        .enumerate()
        .map(|(i, user)| format!("{}. <@{}>: {}", i + 1, user.user_id, user.message_count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full `/stats` reply for one user.
pub fn format_user_stats(record: &UserRecord, top_words: &[(String, u64)]) -> String {
    let mut text = format!(
        "Messages sent by <@{}>: {}\nTime in voice channels: {}\nMost used words:",
        record.user_id,
        record.message_count,
        format_duration(record.voice_seconds as u64),
    );

    if !top_words.is_empty() {
        text.push('\n');
        text.push_str(&format_top_words(top_words));
    }

    text
}
