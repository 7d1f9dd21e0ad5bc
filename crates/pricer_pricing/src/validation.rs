//! Monte Carlo versus Black-Scholes cross-validation.
//!
//! Compares the simulated call and put against their closed-form values and
//! checks the sample mean of S(T) against the risk-neutral forward.

use pricer_core::types::{MarketParameters, OptionSide, PricingError, PricingResult};
use pricer_models::analytical::{BlackScholes, GreeksResult};
use tracing::{debug, info};

use crate::mc::{EuropeanMcOutcome, MonteCarloPricer, SimulationConfig};

/// Monte Carlo and analytic prices for one side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SideComparison {
    /// Monte Carlo estimate with standard error.
    pub monte_carlo: PricingResult,
    /// Closed-form reference.
    pub analytic: PricingResult,
    /// Analytic Greeks for the same side.
    pub greeks: GreeksResult,
    /// (MC - analytic) / SE; `None` when the standard error is zero.
    pub z_score: Option<f64>,
}

impl SideComparison {
    /// Builds a comparison from a Monte Carlo estimate and the analytic pricer.
    ///
    /// # Errors
    ///
    /// Propagates [`BlackScholes::price_with_greeks`] errors.
    pub fn new(monte_carlo: PricingResult, analytic: &BlackScholes) -> Result<Self, PricingError> {
        let (analytic, greeks) = analytic.price_with_greeks(monte_carlo.side)?;
        Ok(Self {
            monte_carlo,
            analytic,
            greeks,
            z_score: monte_carlo.z_score(analytic.price),
        })
    }

    /// Absolute pricing error |MC - analytic|.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.monte_carlo.price - self.analytic.price).abs()
    }

    /// Returns `true` if the estimate lies within `n_se` standard errors.
    ///
    /// With a zero standard error only exact agreement passes.
    pub fn within(&self, n_se: f64) -> bool {
        match self.z_score {
            Some(z) => z.abs() <= n_se,
            None => self.abs_error() == 0.0,
        }
    }
}

/// Full cross-validation of one Monte Carlo run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrossValidationReport {
    /// Sample mean of S(T).
    pub terminal_mean: f64,
    /// Theoretical E[S(T)] = S₀·e^((r-q)T).
    pub risk_neutral_mean: f64,
    /// Call comparison.
    pub call: SideComparison,
    /// Put comparison.
    pub put: SideComparison,
}

impl CrossValidationReport {
    /// Builds the report from an existing Monte Carlo outcome.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InsufficientSamples`] if the outcome has no terminal prices
    /// - analytic pricer errors (σ or T not positive, overflow)
    pub fn from_outcome(
        params: &MarketParameters,
        outcome: &EuropeanMcOutcome,
    ) -> Result<Self, PricingError> {
        let terminal_mean = outcome
            .terminal_mean()
            .ok_or(PricingError::InsufficientSamples {
                required: 1,
                actual: 0,
            })?;
        let analytic = BlackScholes::new(params)?;

        let report = Self {
            terminal_mean,
            risk_neutral_mean: params.forward(),
            call: SideComparison::new(outcome.call, &analytic)?,
            put: SideComparison::new(outcome.put, &analytic)?,
        };

        debug!(
            terminal_mean = report.terminal_mean,
            risk_neutral_mean = report.risk_neutral_mean,
            call_z = ?report.call.z_score,
            put_z = ?report.put.z_score,
            "cross-validation"
        );
        Ok(report)
    }

    /// Returns the comparison for one side.
    #[inline]
    pub fn side(&self, side: OptionSide) -> &SideComparison {
        match side {
            OptionSide::Call => &self.call,
            OptionSide::Put => &self.put,
        }
    }

    /// Relative error of the terminal sample mean against the forward.
    #[inline]
    pub fn mean_relative_error(&self) -> f64 {
        (self.terminal_mean - self.risk_neutral_mean).abs() / self.risk_neutral_mean
    }

    /// Returns `true` if both sides are within `n_se` standard errors.
    #[inline]
    pub fn all_within(&self, n_se: f64) -> bool {
        self.call.within(n_se) && self.put.within(n_se)
    }
}

/// Simulates, prices both sides and compares them with Black-Scholes.
///
/// # Errors
///
/// Propagates simulation, estimation and analytic pricing errors.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParameters;
/// use pricer_pricing::mc::SimulationConfig;
/// use pricer_pricing::validation::cross_validate;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
/// let config = SimulationConfig::new(16, 20_000, 42).unwrap();
///
/// let report = cross_validate(&params, &config).unwrap();
/// assert!(report.call.analytic.std_error.is_none());
/// assert!(report.mean_relative_error() < 0.01);
/// ```
pub fn cross_validate(
    params: &MarketParameters,
    config: &SimulationConfig,
) -> Result<CrossValidationReport, PricingError> {
    let outcome = MonteCarloPricer::new(*config).price_european(params)?;
    let report = CrossValidationReport::from_outcome(params, &outcome)?;

    info!(
        n_paths = config.n_paths(),
        call_mc = report.call.monte_carlo.price,
        call_bs = report.call.analytic.price,
        put_mc = report.put.monte_carlo.price,
        put_bs = report.put.analytic.price,
        "Monte Carlo cross-validated against Black-Scholes"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::PricingMethod;

    fn atm_params() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let config = SimulationConfig::new(8, 10_000, 42).unwrap();
        let report = cross_validate(&atm_params(), &config).unwrap();

        assert_eq!(report.call.analytic.method, PricingMethod::Analytic);
        assert_eq!(
            report.call.monte_carlo.method,
            PricingMethod::MonteCarlo { n_paths: 10_000 }
        );
        assert_relative_eq!(report.call.analytic.price, 10.450583572185565, epsilon = 1e-9);
        assert_relative_eq!(report.put.analytic.price, 5.573526022256971, epsilon = 1e-9);
        assert_relative_eq!(report.risk_neutral_mean, 100.0 * 0.05_f64.exp(), epsilon = 1e-12);
        assert_eq!(report.side(OptionSide::Put), &report.put);
        assert_eq!(report.put.greeks.side, OptionSide::Put);
    }

    #[test]
    fn test_within_uses_z_score() {
        let analytic = BlackScholes::new(&atm_params()).unwrap();
        let mc = PricingResult::monte_carlo(OptionSide::Call, 10.45 + 0.2, 0.1, 1000);
        let cmp = SideComparison::new(mc, &analytic).unwrap();

        assert!(cmp.z_score.unwrap() > 1.9 && cmp.z_score.unwrap() < 2.1);
        assert!(cmp.within(3.0));
        assert!(!cmp.within(1.0));
    }

    #[test]
    fn test_zero_standard_error_requires_exact_match() {
        let analytic = BlackScholes::new(&atm_params()).unwrap();
        let mc = PricingResult::monte_carlo(OptionSide::Put, 0.0, 0.0, 1000);
        let cmp = SideComparison::new(mc, &analytic).unwrap();

        assert_eq!(cmp.z_score, None);
        assert!(!cmp.within(3.0));
    }

    #[test]
    fn test_single_path_propagates_insufficient_samples() {
        let config = SimulationConfig::new(8, 1, 42).unwrap();
        assert!(matches!(
            cross_validate(&atm_params(), &config),
            Err(PricingError::InsufficientSamples { .. })
        ));
    }
}
