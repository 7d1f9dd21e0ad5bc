//! Run configuration management
//!
//! Handles loading the run configuration from TOML files, environment
//! variables, and CLI arguments.
//!
//! ```toml
//! [market]
//! spot = 100.0
//! strike = 140.0
//! rate = 0.05
//! dividend_yield = 0.0
//! volatility = 0.40
//! maturity = 0.684931506849315
//!
//! [simulation]
//! n_steps = 256
//! n_paths = 5000
//! seed = 5000
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::MarketParameters;
use pricer_pricing::mc::SimulationConfig;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "EUROMC_SEED";
/// Environment variable overriding the path count.
pub const ENV_PATHS: &str = "EUROMC_PATHS";
/// Environment variable overriding the step count.
pub const ENV_STEPS: &str = "EUROMC_STEPS";

/// `[market]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketSection {
    /// Spot price S₀
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Continuous dividend yield q
    pub dividend_yield: f64,
    /// Volatility σ
    pub volatility: f64,
    /// Maturity T in years
    pub maturity: f64,
}

impl Default for MarketSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 140.0,
            rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.40,
            maturity: 250.0 / 365.0,
        }
    }
}

/// `[simulation]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    /// Time steps per path (N)
    pub n_steps: usize,
    /// Number of paths (M)
    pub n_paths: usize,
    /// Seed
    pub seed: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            n_steps: 256,
            n_paths: 5000,
            seed: 5000,
        }
    }
}

/// Complete run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Market inputs
    pub market: MarketSection,
    /// Simulation grid and seed
    pub simulation: SimulationSection,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse_env(&lookup, ENV_SEED)? {
            self.simulation.seed = seed;
        }
        if let Some(n_paths) = parse_env(&lookup, ENV_PATHS)? {
            self.simulation.n_paths = n_paths;
        }
        if let Some(n_steps) = parse_env(&lookup, ENV_STEPS)? {
            self.simulation.n_steps = n_steps;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(seed) = cli.seed {
            self.simulation.seed = seed;
        }
        if let Some(n_paths) = cli.n_paths {
            self.simulation.n_paths = n_paths;
        }
        if let Some(n_steps) = cli.n_steps {
            self.simulation.n_steps = n_steps;
        }
    }

    /// Validated market snapshot
    pub fn market_parameters(&self) -> Result<MarketParameters> {
        let m = &self.market;
        Ok(MarketParameters::new(
            m.spot,
            m.strike,
            m.rate,
            m.dividend_yield,
            m.volatility,
            m.maturity,
        )?)
    }

    /// Validated simulation configuration
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let s = &self.simulation;
        Ok(SimulationConfig::builder()
            .n_steps(s.n_steps)
            .n_paths(s.n_paths)
            .seed(s.seed)
            .build()?)
    }
}

fn parse_env<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidEnv { name, value }),
        None => Ok(None),
    }
}

/// Simulation overrides taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    /// `--seed`
    pub seed: Option<u64>,
    /// `--paths`
    pub n_paths: Option<usize>,
    /// `--steps`
    pub n_steps: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(config_file: Option<&Path>, cli: &CliOverrides) -> Result<RunConfig> {
    build_config_with_env(config_file, cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(
    config_file: Option<&Path>,
    cli: &CliOverrides,
    lookup: F,
) -> Result<RunConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = match config_file {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);
    Ok(config)
}
