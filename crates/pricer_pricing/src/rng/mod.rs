//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded standard-normal source for Monte Carlo
//! simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded for deterministic sequences
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Fixed draw order**: one batch of M normals per time step, consumed in
//!   time-step order, so results never depend on thread scheduling
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.draw_batch(&mut buffer).unwrap();
//! ```
//!
//! ## Algorithm
//!
//! `rand::rngs::StdRng` seeded with `seed_from_u64`, and normal variates via
//! the Ziggurat method (`rand_distr::StandardNormal`).

mod prng;

// Public re-exports
pub use prng::PricerRng;
