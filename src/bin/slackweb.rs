// Smoke check for a Slack token: authenticate, then print the team record.

use anyhow::{Context, Result};
use slackweb::SlackWebApi;
use slackweb::core::config::ApiConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    slackweb::setup_logging();

    let config = ApiConfig::from_env().context("failed to load Slack API configuration")?;
    let api = SlackWebApi::from_config(&config).context("failed to build Slack client")?;

    api.authentication_test()
        .await
        .context("auth.test failed")?;
    info!("Token accepted by Slack");

    match api.team_info().await.context("team.info failed")? {
        Some(team) => println!("{}", serde_json::to_string_pretty(&team)?),
        None => println!("(team.info returned no team)"),
    }

    Ok(())
}
