//! Main entry point for the translation gateway CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_gateway::cli::commands::{self, Commands};

/// Translation gateway - one stable contract over heterogeneous providers
#[derive(Parser, Debug)]
#[command(name = "translate-gateway", version, about, long_about = None)]
struct Args {
    /// Provider API key (optional, defaults to RAPIDAPI_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translate_gateway={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        std::env::set_var("RAPIDAPI_KEY", api_key);
    }

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match args.command {
        Some(Commands::Serve { host, port, debug }) => {
            commands::handle_serve(host, port, debug).await?;
        }
        Some(Commands::Translate {
            text,
            target,
            source,
            provider,
        }) => {
            commands::handle_translate(text, target, source, provider).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
