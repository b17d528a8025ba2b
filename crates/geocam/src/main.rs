//! GeoCam CLI - builds the GeoCam website from JSON content and HTML templates.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "geocam")]
#[command(about = "Static site builder for the GeoCam website")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to geocam.toml config file
    #[arg(short, long, default_value = "geocam.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site (default)
    Build {
        /// Output directory (defaults to config or "public")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Preview the built site
    Serve {
        /// Port to listen on (defaults to config or 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve (defaults to the configured output directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load(&cli.config)?;

    match cli.command.unwrap_or(Commands::Build { output: None }) {
        Commands::Build { output } => {
            commands::build::run(config, output)?;
        }
        Commands::Serve { port, dir, no_open } => {
            let options = commands::serve::ServeOptions {
                dir: dir.unwrap_or_else(|| PathBuf::from(&config.paths.output)),
                port: port.unwrap_or(config.serve.port),
                open_browser: config.serve.open && !no_open,
            };
            commands::serve::run(options).await?;
        }
    }

    Ok(())
}
