pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "finbin")]
#[command(about = "FinBin CLI - personal-finance dashboard client")]
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
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Savings bucket management")]
    Bucket {
        #[command(subcommand)]
        cmd: commands::bucket::BucketCommands,
    },

    #[command(about = "Transaction browsing and entry")]
    Transaction {
        #[command(subcommand)]
        cmd: commands::transaction::TransactionCommands,
    },

    #[command(about = "Financial summary and onboarding")]
    Summary {
        #[command(subcommand)]
        cmd: commands::summary::SummaryCommands,
    },

    #[command(about = "Recommendations and chat assistant")]
    Advisor {
        #[command(subcommand)]
        cmd: commands::advisor::AdvisorCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Bucket { cmd } => commands::bucket::handle(cmd, output_format).await,
        Commands::Transaction { cmd } => commands::transaction::handle(cmd, output_format).await,
        Commands::Summary { cmd } => commands::summary::handle(cmd, output_format).await,
        Commands::Advisor { cmd } => commands::advisor::handle(cmd, output_format).await,
    }
}
