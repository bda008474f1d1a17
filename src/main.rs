mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{
    bot::discord::DiscordGateway, config::Config, data::score::ScoreStore, error::AppError,
    scheduler::leaderboard_reports,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    // Scores only live in memory and start empty on every launch
    let scores = ScoreStore::shared();

    let client = bot::start::init_bot(&config, scores.clone()).await?;
    let gateway = Arc::new(DiscordGateway::new(
        client.http.clone(),
        client.cache.clone(),
    ));

    leaderboard_reports::start_scheduler(config.schedule(), scores, gateway).await?;

    bot::start::start_bot(client).await
}
