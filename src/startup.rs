use crate::{
    config::Config,
    data::{reply::ReplyRepository, substat::SubstatRepository},
    error::AppError,
    service::artifact::ProcEvaluator,
    state::BotState,
};

/// Initializes tracing output.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`, e.g. `RUST_LOG=spunya=debug`
/// to see every handled event.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Loads the resource files and builds the shared bot state.
///
/// # Arguments
/// - `config` - Application configuration containing the resources directory
///
/// # Returns
/// - `Ok(BotState)` - Substat table and reply catalog loaded, empty statistics store
/// - `Err(AppError::ResourceErr)` - A resource file is missing, malformed or invalid
pub fn load_state(config: &Config) -> Result<BotState, AppError> {
    let substats = SubstatRepository::new(&config.resources_dir).load()?;
    let replies = ReplyRepository::new(&config.resources_dir).load()?;

    tracing::info!(
        "Loaded {} substats and {} reply keywords from {}",
        substats.len(),
        replies.questions.len(),
        config.resources_dir.display()
    );

    Ok(BotState::new(
        substats,
        replies,
        ProcEvaluator::with_call_budget(config.proc_search_call_budget),
        config.ignored_role_id,
    ))
}
