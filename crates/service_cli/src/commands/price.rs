//! Price command implementation
//!
//! Prices the configured option with the Monte Carlo engine and the
//! Black-Scholes formula, and writes a JSON report to stdout.

use pricer_core::types::MarketParameters;
use pricer_pricing::mc::{MonteCarloPricer, PathMatrix, SimulationConfig};
use pricer_pricing::validation::{CrossValidationReport, SideComparison};
use serde::Serialize;
use tracing::info;

use crate::config::RunConfig;
use crate::Result;

/// Machine-readable output of `euromc price`.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    /// Market inputs used
    pub market: MarketParameters,
    /// Simulation grid and seed used
    pub simulation: SimulationConfig,
    /// Sample mean of S(T)
    pub terminal_mean: f64,
    /// S₀·e^((r-q)T)
    pub risk_neutral_mean: f64,
    /// Monte Carlo vs analytic call, with call Greeks
    pub call: SideComparison,
    /// Monte Carlo vs analytic put, with put Greeks
    pub put: SideComparison,
    /// Full path matrix (`--include-paths` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathMatrix>,
}

/// Build the price report without printing it
pub fn build_report(config: &RunConfig, include_paths: bool) -> Result<PriceReport> {
    let market = config.market_parameters()?;
    let simulation = config.simulation_config()?;

    info!(
        n_paths = simulation.n_paths(),
        n_steps = simulation.n_steps(),
        seed = simulation.seed(),
        "Starting pricing..."
    );

    let (paths, outcome) = MonteCarloPricer::new(simulation).simulate_and_price(&market)?;
    let validation = CrossValidationReport::from_outcome(&market, &outcome)?;

    info!(
        call_mc = validation.call.monte_carlo.price,
        call_bs = validation.call.analytic.price,
        put_mc = validation.put.monte_carlo.price,
        put_bs = validation.put.analytic.price,
        "Pricing complete"
    );

    Ok(PriceReport {
        market,
        simulation,
        terminal_mean: validation.terminal_mean,
        risk_neutral_mean: validation.risk_neutral_mean,
        call: validation.call,
        put: validation.put,
        paths: include_paths.then_some(paths),
    })
}

/// Run the price command
pub fn run(config: &RunConfig, include_paths: bool) -> Result<()> {
    let report = build_report(config, include_paths)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> RunConfig {
        let mut config = RunConfig::default();
        config.simulation.n_steps = 8;
        config.simulation.n_paths = 200;
        config
    }

    #[test]
    fn test_report_without_paths() {
        let report = build_report(&small_config(), false).unwrap();
        assert!(report.paths.is_none());
        assert!(report.call.monte_carlo.std_error.unwrap() > 0.0);
        assert!((report.call.analytic.price - 3.7444000798819594).abs() < 1e-9);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("paths").is_none());
        assert!(json["call"]["greeks"]["delta"].is_number());
        assert_eq!(json["simulation"]["n_paths"], 200);
    }

    #[test]
    fn test_report_with_paths() {
        let report = build_report(&small_config(), true).unwrap();
        let paths = report.paths.as_ref().unwrap();
        assert_eq!(paths.n_paths(), 200);
        assert_eq!(paths.n_steps(), 8);
        assert_eq!(paths.path(0)[0], 100.0);
    }

    #[test]
    fn test_single_path_fails() {
        let mut config = small_config();
        config.simulation.n_paths = 1;
        assert!(build_report(&config, false).is_err());
    }
}
