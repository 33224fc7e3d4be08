mod auth;
mod cli;
mod error;
mod output;
mod providers;
mod report;
mod timing;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting cidelta - Workflow Timing Analysis Tool");
    cli.execute().await?;

    Ok(())
}
