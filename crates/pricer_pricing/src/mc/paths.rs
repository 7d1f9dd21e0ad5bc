//! Path generation for Monte Carlo simulation.
//!
//! This module implements risk-neutral Geometric Brownian Motion (GBM) path
//! generation with the exact log-normal step:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - q - ½σ²)dt + σ√dt × Z)
//! ```
//!
//! Because each step is conditionally log-normal, the scheme has no
//! discretisation bias for any number of steps.
//!
//! # Draw Order
//!
//! One batch of M standard normals is drawn per time step, step 1 first, and
//! element `i` of each batch drives path `i`. The draws are always taken
//! sequentially; only the per-row update is parallelised (feature
//! `parallel`), so the matrix is bit-identical with or without rayon.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.

use pricer_core::types::{MarketParameters, PricingError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::SimulationConfig;
use crate::rng::PricerRng;

/// Simulated price grid: M paths × (N + 1) time points.
///
/// Column 0 holds S₀ for every path, column N the terminal price. The matrix
/// is read-only once produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathMatrix {
    n_paths: usize,
    n_steps: usize,
    /// Row-major prices.
    data: Vec<f64>,
}

impl PathMatrix {
    /// Returns the number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps (columns minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of columns, N + 1.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.n_steps + 1
    }

    /// Returns one path as a slice of N + 1 prices.
    ///
    /// # Panics
    ///
    /// Panics if `path_idx >= n_paths`.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let cols = self.n_columns();
        &self.data[path_idx * cols..(path_idx + 1) * cols]
    }

    /// Iterates over the paths.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.n_columns())
    }

    /// Collects one time column (the price of every path at `step_idx`).
    ///
    /// # Panics
    ///
    /// Panics if `step_idx > n_steps`.
    pub fn column(&self, step_idx: usize) -> Vec<f64> {
        assert!(step_idx <= self.n_steps, "step index out of range");
        self.rows().map(|row| row[step_idx]).collect()
    }

    /// Returns the raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Extracts the terminal prices (last column).
    pub fn terminal_prices(&self) -> TerminalPrices {
        TerminalPrices(self.column(self.n_steps))
    }
}

/// Terminal prices S(T), one per path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TerminalPrices(Vec<f64>);

impl TerminalPrices {
    /// Wraps an existing sample of terminal prices.
    #[inline]
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    /// Returns the prices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sample mean of S(T); compare with [`MarketParameters::forward`].
    ///
    /// Returns `None` for an empty sample.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
        }
    }

    /// Consumes the wrapper and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for TerminalPrices {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Simulates M risk-neutral GBM paths over N steps.
///
/// # Arguments
///
/// * `params` - Market snapshot (S₀, r, q, σ, T are used)
/// * `config` - Time grid and path count
/// * `rng` - Normal source; advanced by exactly N × M draws
///
/// # Errors
///
/// - [`PricingError::InvalidConfig`] if N or M is zero, or σ/T is not positive
/// - [`PricingError::NumericOverflow`] if a step produces a non-finite or zero price
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParameters;
/// use pricer_pricing::mc::{simulate, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
/// let config = SimulationConfig::new(256, 100, 5000).unwrap();
/// let mut rng = PricerRng::from_seed(config.seed());
///
/// let paths = simulate(&params, &config, &mut rng).unwrap();
/// assert_eq!(paths.n_paths(), 100);
/// assert!(paths.rows().all(|row| row[0] == 100.0));
/// ```
pub fn simulate(
    params: &MarketParameters,
    config: &SimulationConfig,
    rng: &mut PricerRng,
) -> Result<PathMatrix, PricingError> {
    config.validate()?;

    let volatility = params.volatility();
    let maturity = params.maturity();
    if volatility <= 0.0 {
        return Err(PricingError::invalid_config(
            "volatility",
            format!("must be positive, got {}", volatility),
        ));
    }
    if maturity <= 0.0 {
        return Err(PricingError::invalid_config(
            "maturity",
            format!("must be positive, got {}", maturity),
        ));
    }

    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let n_columns = n_steps + 1;
    let dt = config.dt(maturity);

    // Precompute drift and volatility terms (outside loop)
    let drift_dt =
        (params.rate() - params.dividend_yield() - 0.5 * volatility * volatility) * dt;
    let vol_sqrt_dt = volatility * dt.sqrt();
    if !drift_dt.is_finite() || !vol_sqrt_dt.is_finite() {
        return Err(PricingError::numeric_overflow(format!(
            "step coefficients drift·dt = {}, σ·√dt = {}",
            drift_dt, vol_sqrt_dt
        )));
    }

    debug!(n_paths, n_steps, dt, seed = rng.seed(), "simulating GBM paths");

    let mut data = vec![0.0; n_paths * n_columns];
    for row in data.chunks_exact_mut(n_columns) {
        row[0] = params.spot();
    }

    let mut normals = vec![0.0; n_paths];
    for step in 0..n_steps {
        rng.draw_batch(&mut normals)?;
        advance_step(&mut data, &normals, n_columns, step, drift_dt, vol_sqrt_dt);

        if let Some(path_idx) = first_invalid(&data, n_columns, step + 1) {
            let value = data[path_idx * n_columns + step + 1];
            warn!(path_idx, step = step + 1, value, "GBM step left representable range");
            return Err(PricingError::numeric_overflow(format!(
                "price {} on path {} at step {}",
                value,
                path_idx,
                step + 1
            )));
        }
    }

    debug!(n_paths, n_steps, "GBM simulation complete");

    Ok(PathMatrix {
        n_paths,
        n_steps,
        data,
    })
}

/// Simulates with a fresh RNG seeded from `config.seed()`.
///
/// # Errors
///
/// Same as [`simulate`].
pub fn simulate_with_seed(
    params: &MarketParameters,
    config: &SimulationConfig,
) -> Result<PathMatrix, PricingError> {
    let mut rng = PricerRng::from_seed(config.seed());
    simulate(params, config, &mut rng)
}

/// Advances every path from column `step` to `step + 1`.
#[cfg(feature = "parallel")]
fn advance_step(
    data: &mut [f64],
    normals: &[f64],
    n_columns: usize,
    step: usize,
    drift_dt: f64,
    vol_sqrt_dt: f64,
) {
    data.par_chunks_exact_mut(n_columns)
        .zip(normals.par_iter())
        .for_each(|(row, &z)| {
            row[step + 1] = row[step] * (drift_dt + vol_sqrt_dt * z).exp();
        });
}

/// Advances every path from column `step` to `step + 1`.
#[cfg(not(feature = "parallel"))]
fn advance_step(
    data: &mut [f64],
    normals: &[f64],
    n_columns: usize,
    step: usize,
    drift_dt: f64,
    vol_sqrt_dt: f64,
) {
    for (row, &z) in data.chunks_exact_mut(n_columns).zip(normals.iter()) {
        row[step + 1] = row[step] * (drift_dt + vol_sqrt_dt * z).exp();
    }
}

/// Index of the first path whose price at `column` is non-finite or not positive.
fn first_invalid(data: &[f64], n_columns: usize, column: usize) -> Option<usize> {
    data.chunks_exact(n_columns).position(|row| {
        let price = row[column];
        !price.is_finite() || price <= 0.0
    })
}
