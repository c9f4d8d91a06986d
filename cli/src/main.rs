mod cli;
mod commands;
mod config;
mod output;
mod render;
mod test_utils;
mod timing;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::commands::{
    generate_completions, run_categories, run_list, run_review, run_set_status,
};
use crate::config::{Config, Overrides};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let config = Config::load()?.resolve(Overrides {
        api_url: cli.api_url,
        session_cookie: cli.session_cookie,
        token: cli.token,
    })?;
    tracing::debug!(api = %config.admin_url(), "resolved configuration");

    match cli.command {
        Commands::List { filter } => run_list(&config, filter).await,
        Commands::Categories => run_categories(&config).await,
        Commands::SetStatus { id, status } => run_set_status(&config, &id, status).await,
        Commands::Review { filter } => run_review(&config, filter).await,
        Commands::Completions { .. } => Ok(()),
    }
}
