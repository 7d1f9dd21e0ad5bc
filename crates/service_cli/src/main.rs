//! euromc CLI - European option pricing from the command line
//!
//! Monte Carlo (risk-neutral GBM) and Black-Scholes pricing with
//! cross-validation.
//!
//! # Commands
//!
//! - `euromc price` - Monte Carlo and analytic prices, SE, z-scores and Greeks
//! - `euromc greeks --side <call|put>` - Analytic price and Greeks
//! - `euromc check` - Validate the effective configuration
//!
//! # Configuration
//!
//! Defaults, then `--config <file.toml>`, then `EUROMC_SEED` /
//! `EUROMC_PATHS` / `EUROMC_STEPS`, then command-line flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricer_core::types::OptionSide;
use service_cli::commands;
use service_cli::config::{build_config, CliOverrides};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// European option pricer CLI
#[derive(Parser)]
#[command(name = "euromc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price call and put by Monte Carlo and Black-Scholes
    Price {
        /// Number of Monte Carlo paths
        #[arg(short, long)]
        paths: Option<usize>,

        /// Number of time steps per path
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Include the full path matrix in the output
        #[arg(long)]
        include_paths: bool,
    },

    /// Analytic Black-Scholes price and Greeks
    Greeks {
        /// Option side (call, put)
        #[arg(long, default_value = "call")]
        side: OptionSide,
    },

    /// Check the effective configuration
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> service_cli::Result<()> {
    let overrides = match &cli.command {
        Commands::Price {
            paths, steps, seed, ..
        } => CliOverrides {
            seed: *seed,
            n_paths: *paths,
            n_steps: *steps,
        },
        _ => CliOverrides::default(),
    };
    let config = build_config(cli.config.as_deref(), &overrides)?;

    match cli.command {
        Commands::Price { include_paths, .. } => commands::price::run(&config, include_paths),
        Commands::Greeks { side } => commands::greeks::run(&config, side),
        Commands::Check => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
