//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for European Monte Carlo
//! pricing.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`](crate::rng::PricerRng))
//! 2. Path generation (via [`simulate`](super::paths::simulate))
//! 3. Payoff estimation and discounting (via [`estimate`](super::estimator::estimate))
//!
//! Every pricing call reseeds from the configuration, so repeated calls on
//! the same pricer give bit-identical results.

use pricer_core::types::{MarketParameters, PricingError, PricingResult};
use tracing::debug;

use super::config::SimulationConfig;
use super::estimator::estimate_both;
use super::paths::{simulate, PathMatrix, TerminalPrices};
use crate::rng::PricerRng;

/// Call and put estimates from a single simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EuropeanMcOutcome {
    /// Terminal prices S(T), one per path.
    pub terminal_prices: TerminalPrices,
    /// Monte Carlo call estimate.
    pub call: PricingResult,
    /// Monte Carlo put estimate.
    pub put: PricingResult,
}

impl EuropeanMcOutcome {
    /// Sample mean of S(T); `None` only for an empty sample.
    #[inline]
    pub fn terminal_mean(&self) -> Option<f64> {
        self.terminal_prices.mean()
    }
}

/// Monte Carlo pricer for European options.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParameters;
/// use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_steps(64)
///     .n_paths(2_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
///
/// let pricer = MonteCarloPricer::new(config);
/// let outcome = pricer.price_european(&params).unwrap();
/// println!("Call: {} +/- {}", outcome.call.price, outcome.call.confidence_95());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloPricer {
    config: SimulationConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices the call and the put from one set of simulated paths.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`simulate`] and
    /// [`estimate`](super::estimator::estimate); M = 1 gives
    /// [`PricingError::InsufficientSamples`].
    pub fn price_european(
        &self,
        params: &MarketParameters,
    ) -> Result<EuropeanMcOutcome, PricingError> {
        self.simulate_and_price(params).map(|(_, outcome)| outcome)
    }

    /// Prices both sides and also returns the full path matrix.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloPricer::price_european`].
    pub fn simulate_and_price(
        &self,
        params: &MarketParameters,
    ) -> Result<(PathMatrix, EuropeanMcOutcome), PricingError> {
        let mut rng = PricerRng::from_seed(self.config.seed());
        let paths = simulate(params, &self.config, &mut rng)?;

        let terminal_prices = paths.terminal_prices();
        let (call, put) = estimate_both(terminal_prices.as_slice(), params)?;

        debug!(
            seed = self.config.seed(),
            call = call.price,
            put = put.price,
            "European Monte Carlo pricing complete"
        );

        Ok((
            paths,
            EuropeanMcOutcome {
                terminal_prices,
                call,
                put,
            },
        ))
    }
}
