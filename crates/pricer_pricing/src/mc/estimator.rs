//! Discounted payoff estimation.
//!
//! Turns a sample of terminal prices into a Monte Carlo price and standard
//! error:
//!
//! ```text
//! price = e^(-rT) × mean(payoff)
//! SE    = e^(-rT) × sample_std(payoff, ddof = 1) / √M
//! ```

use pricer_core::types::{MarketParameters, OptionSide, PricingError, PricingResult};
use tracing::debug;

/// Minimum sample size for a sample standard deviation.
const MIN_SAMPLES: usize = 2;

/// Estimates the discounted price and standard error of a European option.
///
/// # Arguments
///
/// * `terminal` - Terminal prices S(T), one per path
/// * `params` - Market snapshot (strike, rate and maturity are used)
/// * `side` - Call or put
///
/// # Errors
///
/// - [`PricingError::InsufficientSamples`] if fewer than 2 prices are given
/// - [`PricingError::NumericOverflow`] if a terminal price is not finite
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionSide};
/// use pricer_pricing::mc::estimate;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.0, 0.0, 0.2, 1.0).unwrap();
/// let result = estimate(&[90.0, 110.0], &params, OptionSide::Call).unwrap();
///
/// assert_eq!(result.price, 5.0);
/// assert!(result.std_error.unwrap() > 0.0);
/// ```
pub fn estimate(
    terminal: &[f64],
    params: &MarketParameters,
    side: OptionSide,
) -> Result<PricingResult, PricingError> {
    let n_paths = terminal.len();
    if n_paths < MIN_SAMPLES {
        return Err(PricingError::InsufficientSamples {
            required: MIN_SAMPLES,
            actual: n_paths,
        });
    }
    if let Some(path_idx) = terminal.iter().position(|s| !s.is_finite()) {
        return Err(PricingError::numeric_overflow(format!(
            "terminal price {} on path {}",
            terminal[path_idx], path_idx
        )));
    }

    let strike = params.strike();
    let payoff = |s: f64| side.intrinsic(s, strike);

    // Two-pass mean and Bessel-corrected variance
    let mean = terminal.iter().map(|&s| payoff(s)).sum::<f64>() / n_paths as f64;
    let variance = terminal
        .iter()
        .map(|&s| (payoff(s) - mean).powi(2))
        .sum::<f64>()
        / (n_paths - 1) as f64;
    let std_error = variance.sqrt() / (n_paths as f64).sqrt();

    let discount_factor = params.discount_factor();
    let price = mean * discount_factor;
    let std_error = std_error * discount_factor;
    if !price.is_finite() || !std_error.is_finite() {
        return Err(PricingError::numeric_overflow(format!(
            "{} estimate {} ± {}",
            side, price, std_error
        )));
    }

    debug!(%side, price, std_error, n_paths, "Monte Carlo estimate");

    Ok(PricingResult::monte_carlo(side, price, std_error, n_paths))
}

/// Estimates call and put from the same terminal sample.
///
/// # Errors
///
/// Same as [`estimate`].
pub fn estimate_both(
    terminal: &[f64],
    params: &MarketParameters,
) -> Result<(PricingResult, PricingResult), PricingError> {
    let call = estimate(terminal, params, OptionSide::Call)?;
    let put = estimate(terminal, params, OptionSide::Put)?;
    Ok((call, put))
}
