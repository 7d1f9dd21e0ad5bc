//! Option side (call or put).

use std::fmt;

/// Side of a European option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionSide {
    /// Both sides, call first.
    pub const ALL: [OptionSide; 2] = [OptionSide::Call, OptionSide::Put];

    /// Intrinsic value `max(S - K, 0)` or `max(K - S, 0)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionSide;
    ///
    /// assert_eq!(OptionSide::Call.intrinsic(150.0, 140.0), 10.0);
    /// assert_eq!(OptionSide::Put.intrinsic(150.0, 140.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (spot - strike).max(0.0),
            OptionSide::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionSide::Call)
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => write!(f, "call"),
            OptionSide::Put => write!(f, "put"),
        }
    }
}

impl std::str::FromStr for OptionSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            other => Err(format!("Unknown option side: {}. Supported: call, put", other)),
        }
    }
}
