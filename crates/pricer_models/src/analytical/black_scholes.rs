//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model (with a continuous
//! dividend or carry yield) for pricing European call and put options with
//! analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Theta is returned per year; dividing by 365 for a per-day figure is left
//! to the caller (see [`GreeksResult::theta_per_day`]).

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{MarketParameters, OptionSide, PricingError, PricingResult};
use tracing::debug;

use super::greeks::GreeksResult;

/// Black-Scholes model for European option pricing.
///
/// Built from a validated [`MarketParameters`] snapshot. The terms shared by
/// every formula (d₁, d₂, √T and both discount factors) are computed once at
/// construction, so each price or Greek is a handful of flops.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParameters, OptionSide};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
/// let bs = BlackScholes::new(&params).unwrap();
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = bs.price_call() - bs.price_put() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
///
/// assert_eq!(bs.gamma(), bs.greeks(OptionSide::Put).gamma);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes {
    params: MarketParameters,
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    /// e^(-qT)
    dividend_discount: f64,
}

impl BlackScholes {
    /// Creates the model for the given market snapshot.
    ///
    /// # Errors
    /// - [`PricingError::InvalidConfig`] if volatility or maturity is not strictly positive
    /// - [`PricingError::NumericOverflow`] if ln(S/K), d₁ or a discount factor is not finite
    pub fn new(params: &MarketParameters) -> Result<Self, PricingError> {
        let vol = params.volatility();
        let maturity = params.maturity();

        // Both appear in the σ√T denominator of d1
        if vol <= 0.0 {
            return Err(PricingError::invalid_config(
                "volatility",
                format!("must be positive, got {}", vol),
            ));
        }
        if maturity <= 0.0 {
            return Err(PricingError::invalid_config(
                "maturity",
                format!("must be positive, got {}", maturity),
            ));
        }

        let sqrt_t = maturity.sqrt();
        let vol_sqrt_t = vol * sqrt_t;

        let log_moneyness = (params.spot() / params.strike()).ln();
        if !log_moneyness.is_finite() {
            return Err(PricingError::numeric_overflow(format!(
                "ln(S/K) with S = {}, K = {}",
                params.spot(),
                params.strike()
            )));
        }

        // d1 = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
        let drift = (params.rate() - params.dividend_yield() + 0.5 * vol * vol) * maturity;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        if !d1.is_finite() || !d2.is_finite() {
            return Err(PricingError::numeric_overflow(format!(
                "d1 = {}, d2 = {}",
                d1, d2
            )));
        }

        let discount = params.discount_factor();
        let dividend_discount = params.dividend_factor();
        if !discount.is_finite() || !dividend_discount.is_finite() {
            return Err(PricingError::numeric_overflow(format!(
                "discount factors e^(-rT) = {}, e^(-qT) = {}",
                discount, dividend_discount
            )));
        }

        Ok(Self {
            params: *params,
            d1,
            d2,
            sqrt_t,
            discount,
            dividend_discount,
        })
    }

    /// Convenience constructor from raw inputs.
    ///
    /// # Errors
    /// Same as [`MarketParameters::new`] followed by [`BlackScholes::new`].
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::from_inputs(100.0, 140.0, 0.05, 0.0, 0.0, 1.0).is_err());
    /// assert!(BlackScholes::from_inputs(100.0, 140.0, 0.05, 0.0, 0.4, 0.0).is_err());
    /// ```
    pub fn from_inputs(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, PricingError> {
        let params =
            MarketParameters::new(spot, strike, rate, dividend_yield, volatility, maturity)?;
        Self::new(&params)
    }

    /// Returns the market snapshot the model was built from.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Returns d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// European call price: S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂).
    #[inline]
    pub fn price_call(&self) -> f64 {
        self.params.spot() * self.dividend_discount * norm_cdf(self.d1)
            - self.params.strike() * self.discount * norm_cdf(self.d2)
    }

    /// European put price: K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁).
    #[inline]
    pub fn price_put(&self) -> f64 {
        self.params.strike() * self.discount * norm_cdf(-self.d2)
            - self.params.spot() * self.dividend_discount * norm_cdf(-self.d1)
    }

    /// Price for the given side.
    #[inline]
    pub fn price(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.price_call(),
            OptionSide::Put => self.price_put(),
        }
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    #[inline]
    pub fn delta(&self, side: OptionSide) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        match side {
            OptionSide::Call => self.dividend_discount * n_d1,
            OptionSide::Put => self.dividend_discount * (n_d1 - 1.0),
        }
    }

    /// Gamma (∂²V/∂S²) = e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.dividend_discount * norm_pdf(self.d1)
            / (self.params.spot() * self.params.volatility() * self.sqrt_t)
    }

    /// Vega (∂V/∂σ) = S·e^(-qT)·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.params.spot() * self.dividend_discount * norm_pdf(self.d1) * self.sqrt_t
    }

    /// Theta per year.
    ///
    /// - Call: -S·φ(d₁)·σ·e^(-qT)/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·φ(d₁)·σ·e^(-qT)/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn theta(&self, side: OptionSide) -> f64 {
        let spot = self.params.spot();
        let strike = self.params.strike();
        let rate = self.params.rate();
        let div = self.params.dividend_yield();

        // Common term: -(S·φ(d₁)·σ·e^(-qT))/(2√T)
        let decay = -(spot * norm_pdf(self.d1) * self.params.volatility() * self.dividend_discount)
            / (2.0 * self.sqrt_t);

        match side {
            OptionSide::Call => {
                decay - rate * strike * self.discount * norm_cdf(self.d2)
                    + div * spot * self.dividend_discount * norm_cdf(self.d1)
            }
            OptionSide::Put => {
                decay + rate * strike * self.discount * norm_cdf(-self.d2)
                    - div * spot * self.dividend_discount * norm_cdf(-self.d1)
            }
        }
    }

    /// All Greeks for one side.
    pub fn greeks(&self, side: OptionSide) -> GreeksResult {
        GreeksResult {
            side,
            delta: self.delta(side),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(side),
        }
    }

    /// Price and Greeks for one side.
    ///
    /// # Errors
    /// [`PricingError::NumericOverflow`] if the price or any Greek is not finite.
    pub fn price_with_greeks(
        &self,
        side: OptionSide,
    ) -> Result<(PricingResult, GreeksResult), PricingError> {
        let price = self.price(side);
        let greeks = self.greeks(side);

        if !price.is_finite() || !greeks.is_finite() {
            return Err(PricingError::numeric_overflow(format!(
                "analytic {} price {} or Greeks {:?} not finite",
                side, price, greeks
            )));
        }

        debug!(%side, price, delta = greeks.delta, "Black-Scholes valuation");
        Ok((PricingResult::analytic(side, price), greeks))
    }
}

/// Analytic entry point: Black-Scholes price and Greeks for one side.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParameters, OptionSide};
/// use pricer_models::analytical::price_analytic;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
/// let (result, greeks) = price_analytic(&params, OptionSide::Call).unwrap();
///
/// assert!((result.price - 10.4506).abs() < 1e-4);
/// assert!(result.std_error.is_none());
/// assert!(greeks.delta > 0.5);
/// ```
pub fn price_analytic(
    params: &MarketParameters,
    side: OptionSide,
) -> Result<(PricingResult, GreeksResult), PricingError> {
    BlackScholes::new(params)?.price_with_greeks(side)
}
