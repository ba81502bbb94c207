mod config;
mod error;
mod handlers;
mod models;
mod scraping;

use anyhow::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::scraping::driver::ChromeSession;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    dotenv().ok();

    let config = Config::from_env()?;
    info!(
        "looking for slots near {} ({}), headless: {}",
        config.suburb,
        config.state,
        config.headless()
    );

    let outcome = match ChromeSession::connect(config.webdriver_url.as_str(), config.headless()).await {
        Ok(session) => handlers::search::run(session, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = &outcome {
        error!("An error occurred: {:#}", e);
    }
    outcome
}
