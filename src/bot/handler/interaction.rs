use serenity::all::{Context, Interaction};

use crate::{bot::command, state::BotState};

/// Handles the interaction_create event for slash commands and autocomplete.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(invocation) => {
            tracing::debug!(
                "Command /{} invoked by {}",
                invocation.data.name,
                invocation.user.name
            );

            if let Err(e) = command::run(state, &ctx, &invocation).await {
                tracing::error!("Failed to run command /{}: {:?}", invocation.data.name, e);
            }
        }
        Interaction::Autocomplete(request) => {
            if let Err(e) = command::autocomplete(state, &ctx, &request).await {
                tracing::error!(
                    "Failed to autocomplete command /{}: {:?}",
                    request.data.name,
                    e
                );
            }
        }
        _ => {}
    }
}
