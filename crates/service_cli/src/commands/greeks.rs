//! Greeks command implementation
//!
//! Computes the closed-form Black-Scholes price and Greeks for one side.

use pricer_core::types::OptionSide;
use pricer_models::analytical::BlackScholes;
use serde::Serialize;
use tracing::info;

use crate::config::RunConfig;
use crate::Result;

/// Calendar days per year for `theta_per_day`.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Machine-readable output of `euromc greeks`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreeksReport {
    /// Call or put
    pub side: OptionSide,
    /// Black-Scholes price
    pub price: f64,
    /// d1
    pub d1: f64,
    /// d2
    pub d2: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// Time decay per year
    pub theta: f64,
    /// Time decay per calendar day
    pub theta_per_day: f64,
}

/// Build the Greeks report without printing it
pub fn build_report(config: &RunConfig, side: OptionSide) -> Result<GreeksReport> {
    let market = config.market_parameters()?;
    let model = BlackScholes::new(&market)?;
    let (result, greeks) = model.price_with_greeks(side)?;

    info!(%side, price = result.price, "Analytic Greeks computed");

    Ok(GreeksReport {
        side,
        price: result.price,
        d1: model.d1(),
        d2: model.d2(),
        delta: greeks.delta,
        gamma: greeks.gamma,
        vega: greeks.vega,
        theta: greeks.theta,
        theta_per_day: greeks.theta_per_day(DAYS_PER_YEAR),
    })
}

/// Run the greeks command
pub fn run(config: &RunConfig, side: OptionSide) -> Result<()> {
    let report = build_report(config, side)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_call_greeks() {
        let report = build_report(&RunConfig::default(), OptionSide::Call).unwrap();

        assert_relative_eq!(report.price, 3.7444000798819594, epsilon = 1e-9);
        assert_relative_eq!(report.delta, 0.2274018816223169, epsilon = 1e-12);
        assert_relative_eq!(report.gamma, 0.009114161034676214, epsilon = 1e-12);
        assert_relative_eq!(report.vega, 24.97030420459237, epsilon = 1e-9);
        assert_relative_eq!(report.theta, -8.24111823185846, epsilon = 1e-9);
        assert_relative_eq!(report.theta_per_day, -8.24111823185846 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_put_theta() {
        let report = build_report(&RunConfig::default(), OptionSide::Put).unwrap();
        assert_relative_eq!(report.price, 39.0310482645142, epsilon = 1e-9);
        assert_relative_eq!(report.theta, -1.476785822626847, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let mut config = RunConfig::default();
        config.market.maturity = 0.0;
        assert!(build_report(&config, OptionSide::Call).is_err());
    }
}
