//! Error types for structured error handling.
//!
//! This module provides [`PricingError`], the single error taxonomy shared by
//! the simulation, estimation and analytical layers:
//! - `InvalidConfig`: non-positive or non-finite inputs, empty batches
//! - `InsufficientSamples`: too few paths for a sample statistic
//! - `NumericOverflow`: an intermediate result left the representable range

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every public operation validates its inputs before any computation starts,
/// so no partial result is ever returned alongside one of these errors.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_config("volatility", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid configuration for 'volatility': must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A market or simulation parameter is outside its valid domain.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Too few samples to compute a sample statistic.
    #[error("Insufficient samples: {actual} provided, at least {required} required")]
    InsufficientSamples {
        /// Minimum number of samples needed.
        required: usize,
        /// Number of samples supplied.
        actual: usize,
    },

    /// An exponent, logarithm or price became non-finite or underflowed.
    #[error("Numeric overflow: {context}")]
    NumericOverflow {
        /// Where the overflow was detected.
        context: String,
    },
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidConfig`].
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`PricingError::NumericOverflow`].
    pub fn numeric_overflow(context: impl Into<String>) -> Self {
        Self::NumericOverflow {
            context: context.into(),
        }
    }

    /// Returns `true` for configuration errors.
    #[inline]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Checks that a value is finite and strictly positive.
///
/// Used by every constructor that takes prices, volatilities or maturities.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid_config(
            field,
            format!("must be finite, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid_config(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}

/// Checks that a value is finite (any sign).
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_config(
            field,
            format!("must be finite, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = PricingError::invalid_config("spot", "must be positive, got -100");
        assert_eq!(
            format!("{}", err),
            "Invalid configuration for 'spot': must be positive, got -100"
        );
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_insufficient_samples_display() {
        let err = PricingError::InsufficientSamples {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            format!("{}", err),
            "Insufficient samples: 1 provided, at least 2 required"
        );
        assert!(!err.is_invalid_config());
    }

    #[test]
    fn test_numeric_overflow_display() {
        let err = PricingError::numeric_overflow("exp() at step 3");
        assert_eq!(format!("{}", err), "Numeric overflow: exp() at step 3");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::numeric_overflow("test");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("spot", 100.0), Ok(100.0));
        assert!(require_positive("spot", 0.0).is_err());
        assert!(require_positive("spot", -1.0).is_err());
        assert!(require_positive("spot", f64::NAN).is_err());
        assert!(require_positive("spot", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("rate", -0.01), Ok(-0.01));
        assert!(require_finite("rate", f64::NAN).is_err());
        assert!(require_finite("rate", f64::NEG_INFINITY).is_err());
    }
}
