mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = startup::load_state(&config)?;

    tracing::info!("Starting Spunya");

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
