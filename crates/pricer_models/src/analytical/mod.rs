//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model for lognormal dynamics with a carry yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta)
//!
//! ## Design Principles
//!
//! - **Validated inputs**: models are built from `MarketParameters`
//! - **Shared terms computed once**: d₁, d₂ and discount factors live on the model
//! - **Numerical Stability**: uses erfc-based CDF for accuracy in the tails

pub mod black_scholes;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{price_analytic, BlackScholes};
pub use greeks::GreeksResult;
