use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Subscription Census
#[derive(Parser)]
#[command(name = "subscription-census")]
#[command(about = "Decode a base64 proxy subscription and count its nodes per protocol")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print node totals, per-protocol counts and a preview of the first nodes
    Summarise(commands::summarise::SummariseCommand),
    /// Print every decoded node line
    Decode(commands::decode::DecodeCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    // Logs go to stderr; stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Summarise(command)) => command.run(),
        Some(Commands::Decode(command)) => command.run(),
        None => commands::summarise::SummariseCommand::default().run(),
    }
}
