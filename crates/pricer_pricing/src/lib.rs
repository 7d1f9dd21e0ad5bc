//! # pricer_pricing: Monte Carlo engine (Layer 3)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing serves as the simulation engine in the layered architecture:
//! - Seeded standard-normal source (`rng`)
//! - Risk-neutral GBM path simulation and payoff estimation (`mc`)
//! - Cross-validation of Monte Carlo prices against Black-Scholes (`validation`)
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `MarketParameters`, `PricingResult`, `PricingError`
//! - Layer 2 (pricer_models): closed-form reference prices and Greeks
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::MarketParameters;
//! use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
//! let config = SimulationConfig::new(256, 5000, 5000).unwrap();
//!
//! let outcome = MonteCarloPricer::new(config).price_european(&params).unwrap();
//! println!(
//!     "call = {:.4} +/- {:.4}",
//!     outcome.call.price,
//!     outcome.call.confidence_95()
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): per-step row update with rayon. Draws stay
//!   sequential, so results are identical with the feature off.
//! - `serde` (default): `Serialize` for paths, outcomes and reports

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod validation;

// Re-export commonly used items for convenience
pub use mc::{EuropeanMcOutcome, MonteCarloPricer, PathMatrix, SimulationConfig, TerminalPrices};
pub use validation::{cross_validate, CrossValidationReport};
