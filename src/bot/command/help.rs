use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::error::AppError;

pub const NAME: &str = "help";

const HELP_TEXT: &str = "top   - Most active members of the server\n\
                         stats - Member statistics (message count and most used words)\n\
                         roll  - Random number\n\
                         rate  - Count the rolls of an artifact's substats\n\
                         help  - Show this list";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("List of Spunya's commands")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    super::respond(ctx, command, HELP_TEXT).await
}
