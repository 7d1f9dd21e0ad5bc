//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. Every field is
//! required: the builder has no hidden defaults, so a run is fully described
//! by the values the caller passes in.

use pricer_core::types::PricingError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Maximum number of cells M×(N+1) in a path matrix (800 MB of `f64`).
pub const MAX_CELLS: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the time grid, path count and seed.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_steps(256)
///     .n_paths(5000)
///     .seed(5000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 5000);
/// assert_eq!(config.dt(1.0), 1.0 / 256.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    /// Number of time steps per path (N).
    n_steps: usize,
    /// Number of simulation paths (M).
    n_paths: usize,
    /// Seed for reproducibility.
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Creates a validated configuration directly.
    ///
    /// # Errors
    ///
    /// See [`SimulationConfig::validate`].
    pub fn new(n_steps: usize, n_paths: usize, seed: u64) -> Result<Self, PricingError> {
        let config = Self {
            n_steps,
            n_paths,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Time step length dt = T / N for a given maturity.
    #[inline]
    pub fn dt(&self, maturity: f64) -> f64 {
        maturity / self.n_steps as f64
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidConfig`] if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    /// - the M×(N+1) path matrix exceeds [`MAX_CELLS`]
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::invalid_config(
                "n_paths",
                format!("{} must be in range [1, {}]", self.n_paths, MAX_PATHS),
            ));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(PricingError::invalid_config(
                "n_steps",
                format!("{} must be in range [1, {}]", self.n_steps, MAX_STEPS),
            ));
        }
        let cells = self.n_paths.checked_mul(self.n_steps + 1);
        if !matches!(cells, Some(cells) if cells <= MAX_CELLS) {
            return Err(PricingError::invalid_config(
                "n_paths",
                format!(
                    "{} paths x {} columns exceeds the {} cell path matrix limit",
                    self.n_paths,
                    self.n_steps + 1,
                    MAX_CELLS
                ),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// // The seed is required as well
/// assert!(SimulationConfig::builder().n_steps(10).n_paths(10).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_steps: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of time steps per path (N ≥ 1).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of simulation paths (M ≥ 1).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidConfig`] if a field is missing or invalid.
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        let n_steps = self
            .n_steps
            .ok_or_else(|| PricingError::invalid_config("n_steps", "must be specified"))?;
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid_config("n_paths", "must be specified"))?;
        let seed = self
            .seed
            .ok_or_else(|| PricingError::invalid_config("seed", "must be specified"))?;

        SimulationConfig::new(n_steps, n_paths, seed)
    }
}
