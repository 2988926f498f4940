use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    error::AppError, service::stats::StatsStore, state::BotState, util::format::format_top_users,
};

pub const NAME: &str = "top";

/// Number of users listed.
const TOP_USERS: usize = 10;

const EMPTY_REPLY: &str = "Nobody has written anything yet.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Most active members of the server")
}

pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let text = render(&*state.stats.read().await);

    super::respond(ctx, command, text).await
}

/// Leaderboard of the members with the most messages.
pub fn render(stats: &StatsStore) -> String {
    let users = stats.top_users(TOP_USERS);
    if users.is_empty() {
        return EMPTY_REPLY.to_string();
    }

    format_top_users(&users)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn lists_at_most_ten_users() {
        let mut stats = StatsStore::new();
        for user_id in 1..=12 {
            stats.track(user_id);
            for _ in 0..user_id {
                stats.record_message(user_id, "hello", Utc::now());
            }
        }

        let text = render(&stats);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1. <@12>: 12");
        assert_eq!(lines[9], "10. <@3>: 3");
    }

    #[test]
    fn empty_store_has_placeholder() {
        assert_eq!(render(&StatsStore::new()), EMPTY_REPLY);
    }
}
