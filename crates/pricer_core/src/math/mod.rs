//! Mathematical utilities.
//!
//! - [`distributions`]: standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
