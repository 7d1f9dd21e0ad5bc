//! Pricing result shared by the Monte Carlo and analytical engines.

use super::option::OptionSide;

/// How a price was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PricingMethod {
    /// Discounted average over simulated paths.
    MonteCarlo {
        /// Number of paths in the estimate.
        n_paths: usize,
    },
    /// Closed-form Black-Scholes.
    Analytic,
}

/// Price of one option side, tagged with the method that produced it.
///
/// Monte Carlo results carry a standard error; analytic results do not.
///
/// # Examples
/// ```rust
/// use pricer_core::types::{OptionSide, PricingMethod, PricingResult};
///
/// let mc = PricingResult::monte_carlo(OptionSide::Call, 3.80, 0.10, 5000);
/// let bs = PricingResult::analytic(OptionSide::Call, 3.74);
///
/// let z = mc.z_score(bs.price).unwrap();
/// assert!(z.abs() < 3.0);
/// assert_eq!(bs.std_error, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the estimate (Monte Carlo only).
    pub std_error: Option<f64>,
    /// Call or put.
    pub side: OptionSide,
    /// Pricing method.
    pub method: PricingMethod,
}

impl PricingResult {
    /// Creates a Monte Carlo result.
    #[inline]
    pub fn monte_carlo(side: OptionSide, price: f64, std_error: f64, n_paths: usize) -> Self {
        Self {
            price,
            std_error: Some(std_error),
            side,
            method: PricingMethod::MonteCarlo { n_paths },
        }
    }

    /// Creates an exact analytic result.
    #[inline]
    pub fn analytic(side: OptionSide, price: f64) -> Self {
        Self {
            price,
            std_error: None,
            side,
            method: PricingMethod::Analytic,
        }
    }

    /// Returns the 95% confidence interval half-width (zero for analytic results).
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error.unwrap_or(0.0)
    }

    /// Returns the 99% confidence interval half-width (zero for analytic results).
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error.unwrap_or(0.0)
    }

    /// Distance from a reference price in units of standard error.
    ///
    /// Returns `None` when there is no standard error or it is zero
    /// (e.g. every simulated payoff was identical).
    pub fn z_score(&self, reference: f64) -> Option<f64> {
        match self.std_error {
            Some(se) if se > 0.0 => Some((self.price - reference) / se),
            _ => None,
        }
    }
}
