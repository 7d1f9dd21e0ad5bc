//! # pricer_core: Foundation types for European option pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Validated market inputs: `MarketParameters` (`types::market`)
//! - Option side and tagged pricing results (`types::option`, `types::result`)
//! - The shared error taxonomy: `PricingError` (`types::error`)
//! - Standard normal CDF/PDF (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: double-precision complementary error function
//! - thiserror: error derives
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{MarketParameters, OptionSide};
//!
//! let params = MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap();
//! assert!(params.forward() > params.spot());
//!
//! assert_eq!(OptionSide::Call.intrinsic(150.0, params.strike()), 10.0);
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
