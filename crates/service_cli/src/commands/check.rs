//! Check command implementation
//!
//! Validates the effective configuration without running a simulation.

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Checking configuration...");

    let market = config.market_parameters()?;
    info!(
        spot = market.spot(),
        strike = market.strike(),
        rate = market.rate(),
        dividend_yield = market.dividend_yield(),
        volatility = market.volatility(),
        maturity = market.maturity(),
        forward = market.forward(),
        "  Market: OK"
    );

    let simulation = config.simulation_config()?;
    info!(
        n_steps = simulation.n_steps(),
        n_paths = simulation.n_paths(),
        seed = simulation.seed(),
        dt = simulation.dt(market.maturity()),
        "  Simulation: OK"
    );
    if simulation.n_paths() < 2 {
        warn!("  n_paths < 2: standard errors cannot be computed");
    }

    info!("Configuration check complete");
    Ok(())
}
