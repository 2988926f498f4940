use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedValue,
};

use crate::{
    error::AppError,
    service::stats::{top_words, StatsStore},
    state::BotState,
    util::format::format_user_stats,
};

pub const NAME: &str = "stats";

/// Number of words listed.
const TOP_WORDS: usize = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Message statistics of a member (voice time counts after reconnecting)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member of the server")
                .required(false),
        )
}

pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let user_id = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) => Some(user.id.get()),
            _ => None,
        })
        .unwrap_or_else(|| command.user.id.get());

    let text = render(&*state.stats.read().await, user_id);

    super::respond(ctx, command, text).await
}

/// Statistics of `user_id`, or a short notice when the user is not tracked.
pub fn render(stats: &StatsStore, user_id: u64) -> String {
    match stats.get(user_id) {
        Some(record) => format_user_stats(record, &top_words(record, TOP_WORDS)),
        None => format!("There are no statistics for <@{}>.", user_id),
    }
}
