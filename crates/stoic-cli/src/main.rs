use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Posts a daily Stoic quote with a modern reflection to Discord", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a quote, generate a reflection and post to the configured webhooks
    Run,
    /// Print the version of this binary
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local development convenience; a missing .env file is fine.
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Version) => commands::version::execute().await,
        Some(Command::Run) | None => commands::run::execute().await,
    }
}
