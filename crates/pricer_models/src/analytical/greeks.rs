//! Analytical Greeks result type.

use pricer_core::types::OptionSide;

/// Black-Scholes sensitivities for one option side.
///
/// All four values come from the same [`MarketParameters`](pricer_core::types::MarketParameters)
/// snapshot.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S² (side-independent)
/// - `vega`: ∂V/∂σ (side-independent)
/// - `theta`: ∂V/∂t per year, with time decaying (usually negative)
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionSide;
/// use pricer_models::analytical::GreeksResult;
///
/// let greeks = GreeksResult {
///     side: OptionSide::Call,
///     delta: 0.64,
///     gamma: 0.019,
///     vega: 37.5,
///     theta: -6.41,
/// };
///
/// // Theta in price units per calendar day
/// assert!((greeks.theta_per_day(365.0) - (-6.41 / 365.0)).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreeksResult {
    /// Call or put.
    pub side: OptionSide,
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Vega: ∂V/∂σ (per unit of volatility, not per vol point).
    pub vega: f64,
    /// Theta: time decay per year.
    pub theta: f64,
}

impl GreeksResult {
    /// Converts the per-year theta into a per-day figure.
    #[inline]
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }

    /// Returns `true` if every sensitivity is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
    }
}
