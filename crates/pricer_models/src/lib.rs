//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing.
//!
//! This crate provides:
//! - The Black-Scholes-Merton model with a continuous dividend yield
//! - Analytical Greeks used to cross-validate the Monte Carlo engine
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionSide};
//! use pricer_models::analytical::price_analytic;
//!
//! let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
//! let (call, greeks) = price_analytic(&params, OptionSide::Call).unwrap();
//!
//! assert!((call.price - 3.7444).abs() < 1e-4);
//! assert!(greeks.theta < 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
