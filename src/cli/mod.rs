pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "expense")]
#[command(about = "Expense CLI - operator tooling for the Expense API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a bearer token for a user id using the configured secret")]
    Token(commands::token::TokenArgs),

    #[command(about = "Create the expenses table and indexes if missing")]
    Migrate,

    #[command(about = "Check a running server's /health endpoint")]
    Ping(commands::ping::PingArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match cli.command {
        Commands::Token(args) => commands::token::handle(args, config, output_format),
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::Ping(args) => commands::ping::handle(args, config, output_format).await,
    }
}
