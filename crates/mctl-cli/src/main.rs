//! mesheryctl CLI
//!
//! Management commands for Meshery deployments:
//! - System lifecycle (status)
//! - Configuration (init, show, path)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mctl_core::config;
use mesheryctl::commands;

#[derive(Parser)]
#[command(name = "mesheryctl")]
#[command(author, version, about = "Meshery command line interface")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "MESHERY_CONFIG")]
    config: Option<PathBuf>,

    /// Temporarily use a different context for this command
    #[arg(short = 'c', long, global = true)]
    context: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors (status output is still printed)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Meshery lifecycle management
    System {
        #[command(subcommand)]
        action: SystemAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SystemAction {
    /// Check Meshery status
    #[command(long_about = "Check status of Meshery and Meshery adapters.")]
    Status,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Show current configuration
    Show,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::System { action } => match action {
            SystemAction::Status => {
                commands::status_command(&config_path, cli.context.as_deref()).await?;
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Init { force } => {
                commands::config_init(&config_path, force)?;
            }
            ConfigAction::Show => {
                commands::config_show(&config_path)?;
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
