//! Market parameters for a single European option pricing run.

use super::error::{require_finite, require_positive, PricingError};

/// Immutable snapshot of the market and contract inputs.
///
/// # Invariants
///
/// - `spot`, `strike`, `volatility` and `maturity` are finite and strictly positive
/// - `rate` and `dividend_yield` are finite (either sign)
///
/// The only way to obtain a value is through [`MarketParameters::new`], so every
/// downstream operation may rely on these invariants.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Zero volatility is rejected before any pricing happens
/// assert!(MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    /// Spot price (S₀).
    spot: f64,
    /// Strike price (K).
    strike: f64,
    /// Continuously compounded risk-free rate (r).
    rate: f64,
    /// Continuous dividend or carry yield (q).
    dividend_yield: f64,
    /// Annualised volatility (σ).
    volatility: f64,
    /// Time to maturity in years (T).
    maturity: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidConfig`] if `spot`, `strike`, `volatility`
    /// or `maturity` is non-positive, or if any input is NaN or infinite.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            spot: require_positive("spot", spot)?,
            strike: require_positive("strike", strike)?,
            rate: require_finite("rate", rate)?,
            dividend_yield: require_finite("dividend_yield", dividend_yield)?,
            volatility: require_positive("volatility", volatility)?,
            maturity: require_positive("maturity", maturity)?,
        })
    }

    /// Returns the spot price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend (carry) yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Dividend factor e^(-qT).
    #[inline]
    pub fn dividend_factor(&self) -> f64 {
        (-self.dividend_yield * self.maturity).exp()
    }

    /// Forward price S₀·e^((r-q)T), the risk-neutral mean of S(T).
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::MarketParameters;
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.05, 0.2, 1.0).unwrap();
    /// assert!((params.forward() - 100.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * self.maturity).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> MarketParameters {
        MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap()
    }

    #[test]
    fn test_accessors() {
        let p = reference();
        assert_eq!(p.spot(), 100.0);
        assert_eq!(p.strike(), 140.0);
        assert_eq!(p.rate(), 0.05);
        assert_eq!(p.dividend_yield(), 0.0);
        assert_eq!(p.volatility(), 0.40);
        assert_eq!(p.maturity(), 250.0 / 365.0);
    }

    #[test]
    fn test_derived_factors() {
        let p = reference();
        let t: f64 = 250.0 / 365.0;
        assert_relative_eq!(p.discount_factor(), (-0.05 * t).exp(), epsilon = 1e-15);
        assert_eq!(p.dividend_factor(), 1.0);
        assert_relative_eq!(p.forward(), 100.0 * (0.05 * t).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        let cases = [
            (0.0, 140.0, 0.4, 1.0, "spot"),
            (100.0, -1.0, 0.4, 1.0, "strike"),
            (100.0, 140.0, 0.0, 1.0, "volatility"),
            (100.0, 140.0, 0.4, 0.0, "maturity"),
        ];
        for (s, k, vol, t, expected) in cases {
            match MarketParameters::new(s, k, 0.05, 0.0, vol, t) {
                Err(PricingError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
                other => panic!("Expected InvalidConfig for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(MarketParameters::new(f64::NAN, 140.0, 0.05, 0.0, 0.4, 1.0).is_err());
        assert!(MarketParameters::new(100.0, 140.0, f64::INFINITY, 0.0, 0.4, 1.0).is_err());
        assert!(MarketParameters::new(100.0, 140.0, 0.05, f64::NAN, 0.4, 1.0).is_err());
    }

    #[test]
    fn test_negative_rates_allowed() {
        let p = MarketParameters::new(100.0, 100.0, -0.01, -0.02, 0.2, 1.0).unwrap();
        assert!(p.discount_factor() > 1.0);
    }
}
