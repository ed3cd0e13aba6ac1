mod cli;

use anyhow::Result;
use clap::Parser;

use llm_explainer::config;

/// Explore how language models read and write text.
#[derive(Parser)]
#[command(name = "llm-explainer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: cli::Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::init_dotenv();
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli.command).await
}
