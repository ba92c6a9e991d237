//! Quill CLI - Command line interface for the Quill data service

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, config as config_cmd, operations, run, serve};
use config::Config;
use output::OutputFormat;
use quill_storage::{seed_demo_data, MemoryStorage};

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "In-memory accounts, posts and comments over JSON-RPC")]
pub struct Cli {
    /// Config file (defaults to <config dir>/quill/config.toml)
    #[arg(short, long, env = "QUILL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve JSON-RPC on stdio, or over HTTP with --http
    Serve(serve::ServeArgs),
    /// Execute a file of JSON-RPC requests against a fresh store
    Run(run::RunArgs),
    /// List available operations
    Operations,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
}

/// Application context with loaded configuration
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let path = cli.config_path();
        tracing::debug!("Using config at: {:?}", path);

        let config = Config::load(&path)?;
        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.output_format));

        Ok(Self { config, format })
    }

    /// Create a fresh store, seeded with demo data unless disabled
    pub async fn open_storage(&self, empty: bool) -> anyhow::Result<Arc<MemoryStorage>> {
        let storage = Arc::new(MemoryStorage::new());

        if empty || !self.config.seed_demo_data {
            tracing::debug!("Starting with an empty store");
        } else {
            seed_demo_data(storage.as_ref()).await?;
            let (accounts, posts, comments) = storage.counts()?;
            tracing::info!(
                "Seeded demo data: {} accounts, {} posts, {} comments",
                accounts,
                posts,
                comments
            );
        }

        Ok(storage)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries responses, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting quill CLI");

    match &cli.command {
        Commands::Completions(args) => completions::run(args)?,
        Commands::Config(args) => config_cmd::run(args, &cli)?,
        Commands::Operations => {
            let ctx = AppContext::new(&cli)?;
            operations::run(&ctx)?
        }
        Commands::Run(args) => {
            let ctx = AppContext::new(&cli)?;
            run::run(args, &ctx).await?
        }
        Commands::Serve(args) => {
            let ctx = AppContext::new(&cli)?;
            serve::run(args, &ctx).await?
        }
    }

    Ok(())
}
