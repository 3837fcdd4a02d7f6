mod cli;
mod config;
mod render;
mod service;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use service::SkillHubService;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.api_url)?;

    // Create and run the command
    let service = SkillHubService::new(config);
    service.run(cli.command, cli.log_level).await
}
