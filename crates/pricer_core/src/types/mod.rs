//! Core parameter, result and error types.
//!
//! This module provides:
//! - `market`: [`MarketParameters`], the validated market/contract snapshot
//! - `option`: [`OptionSide`] (call or put)
//! - `result`: [`PricingResult`] tagged with [`PricingMethod`]
//! - `error`: [`PricingError`], the shared error taxonomy

pub mod error;
pub mod market;
pub mod option;
pub mod result;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use market::MarketParameters;
pub use option::OptionSide;
pub use result::{PricingMethod, PricingResult};
