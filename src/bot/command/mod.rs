//! Slash commands.
//!
//! Commands are registered per guild from `guild_create`. Each submodule exposes
//! `register()` building its definition and keeps its text rendering in plain
//! functions so it can be tested without a Discord connection.

pub mod help;
pub mod rate;
pub mod roll;
pub mod stats;
pub mod top;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{error::AppError, state::BotState};

/// Definitions of every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![
        top::register(),
        stats::register(),
        roll::register(),
        help::register(),
        rate::register(),
    ]
}

/// Dispatches a command invocation by name.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        top::NAME => top::run(state, ctx, command).await,
        stats::NAME => stats::run(state, ctx, command).await,
        roll::NAME => roll::run(ctx, command).await,
        help::NAME => help::run(ctx, command).await,
        rate::NAME => rate::run(state, ctx, command).await,
        name => {
            tracing::warn!("Received unknown command /{}", name);
            Ok(())
        }
    }
}

/// Answers autocomplete requests. Only `/rate` has autocompleted options.
pub async fn autocomplete(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    match interaction.data.name.as_str() {
        rate::NAME => rate::autocomplete(state, ctx, interaction).await,
        _ => Ok(()),
    }
}

/// Sends `content` as the immediate response to a command.
async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await?;

    Ok(())
}
