//! Monte Carlo pricing kernel for European options.
//!
//! This module provides the simulation infrastructure for pricing European
//! calls and puts under risk-neutral GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationConfig  (time grid, path count, seed)
//! ├── PricerRng         (one batch of M normals per step)
//! └── Orchestration
//!     ├── simulate()        -> PathMatrix
//!     ├── terminal_prices() -> TerminalPrices
//!     └── estimate()        -> PricingResult (price, SE)
//! ```
//!
//! # Examples
//!
//! ## Basic European Option Pricing
//!
//! ```rust
//! use pricer_core::types::MarketParameters;
//! use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_steps(256)
//!     .n_paths(5000)
//!     .seed(5000)
//!     .build()
//!     .unwrap();
//! let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
//!
//! let outcome = MonteCarloPricer::new(config).price_european(&params).unwrap();
//! assert!(outcome.call.price >= 0.0);
//! assert!(outcome.put.std_error.unwrap() > 0.0);
//! ```
//!
//! ## Step by Step
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionSide};
//! use pricer_pricing::mc::{estimate, simulate, SimulationConfig};
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
//! let config = SimulationConfig::new(50, 1000, 42).unwrap();
//! let mut rng = PricerRng::from_seed(config.seed());
//!
//! let paths = simulate(&params, &config, &mut rng).unwrap();
//! let terminal = paths.terminal_prices();
//! let put = estimate(terminal.as_slice(), &params, OptionSide::Put).unwrap();
//! assert!(put.price > 0.0);
//! ```

pub mod config;
pub mod estimator;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_CELLS, MAX_PATHS, MAX_STEPS};
pub use estimator::{estimate, estimate_both};
pub use paths::{simulate, simulate_with_seed, PathMatrix, TerminalPrices};
pub use pricer::{EuropeanMcOutcome, MonteCarloPricer};
