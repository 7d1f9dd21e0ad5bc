//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices of European options agree with
//! the Black-Scholes closed form.
//!
//! # Test Categories
//!
//! 1. **Reference Scenario**: S0=100, K=140, r=5%, σ=40%, T=250/365
//! 2. **Convergence Tests**: Error and standard error shrink with path count
//! 3. **Reproducibility and Boundaries**

use approx::assert_relative_eq;
use pricer_core::types::{MarketParameters, OptionSide, PricingError};
use pricer_models::analytical::{price_analytic, BlackScholes};
use pricer_pricing::mc::{simulate_with_seed, MonteCarloPricer, SimulationConfig};
use pricer_pricing::validation::cross_validate;

/// Reference scenario market parameters.
fn reference_params() -> MarketParameters {
    MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.40, 250.0 / 365.0).unwrap()
}

/// Reference scenario simulation: seed 5000, 256 steps, 5000 paths.
fn reference_config() -> SimulationConfig {
    SimulationConfig::builder()
        .n_steps(256)
        .n_paths(5000)
        .seed(5000)
        .build()
        .unwrap()
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_analytic_prices() {
    let bs = BlackScholes::new(&reference_params()).unwrap();

    assert_relative_eq!(bs.d1(), -0.7474304621873071, epsilon = 1e-12);
    assert_relative_eq!(bs.d2(), -1.0784728176282543, epsilon = 1e-12);
    assert_relative_eq!(bs.price_call(), 3.7444000798819594, epsilon = 1e-9);
    assert_relative_eq!(bs.price_put(), 39.0310482645142, epsilon = 1e-9);
}

#[test]
fn test_reference_call_mc_vs_analytical() {
    let params = reference_params();
    let (analytical, _) = price_analytic(&params, OptionSide::Call).unwrap();

    let outcome = MonteCarloPricer::new(reference_config())
        .price_european(&params)
        .unwrap();
    let result = outcome.call;

    // MC should be within 3 standard errors of analytical
    let tolerance = 3.0 * result.std_error.unwrap();
    let error = (result.price - analytical.price).abs();

    assert!(
        error < tolerance,
        "European Call: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        result.price,
        analytical.price,
        error,
        tolerance
    );
}

#[test]
fn test_reference_put_mc_vs_analytical() {
    let params = reference_params();
    let (analytical, _) = price_analytic(&params, OptionSide::Put).unwrap();

    let outcome = MonteCarloPricer::new(reference_config())
        .price_european(&params)
        .unwrap();
    let result = outcome.put;

    let tolerance = 3.0 * result.std_error.unwrap();
    let error = (result.price - analytical.price).abs();

    assert!(
        error < tolerance,
        "European Put: MC={:.4}, Analytical={:.4}, Error={:.4}",
        result.price,
        analytical.price,
        error
    );
}

#[test]
fn test_reference_terminal_mean_vs_forward() {
    let params = reference_params();
    let report = cross_validate(&params, &reference_config()).unwrap();

    // sd(S_T) ≈ 34 at σ=40%, T≈0.68; 4 SE at 5000 paths ≈ 1.9 (≈1.9%)
    assert!(
        report.mean_relative_error() < 0.02,
        "terminal mean {:.4} vs forward {:.4}",
        report.terminal_mean,
        report.risk_neutral_mean
    );
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_convergence_large_path_count() {
    let params = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
    let config = SimulationConfig::new(16, 200_000, 42).unwrap();
    let report = cross_validate(&params, &config).unwrap();

    for side in OptionSide::ALL {
        let cmp = report.side(side);
        // SE ≈ 0.033 for the call at 200k paths
        assert!(cmp.monte_carlo.std_error.unwrap() < 0.05);
        assert!(
            cmp.within(4.0),
            "{}: MC={:.4}, Analytical={:.4}, z={:?}",
            side,
            cmp.monte_carlo.price,
            cmp.analytic.price,
            cmp.z_score
        );
    }
    assert!(report.mean_relative_error() < 0.002);
}

#[test]
fn test_std_error_decreases_with_paths() {
    let params = reference_params();

    // Small path count
    let small = MonteCarloPricer::new(SimulationConfig::new(8, 1_000, 42).unwrap())
        .price_european(&params)
        .unwrap();

    // Large path count
    let large = MonteCarloPricer::new(SimulationConfig::new(8, 100_000, 42).unwrap())
        .price_european(&params)
        .unwrap();

    // Standard error should decrease by ~sqrt(100) = 10x
    let ratio = small.call.std_error.unwrap() / large.call.std_error.unwrap();
    assert!(
        ratio > 5.0, // Should be ~10, allow some variance
        "SE ratio = {:.2}",
        ratio
    );
}

#[test]
fn test_dividend_yield_mc_vs_analytical() {
    let params = MarketParameters::new(100.0, 95.0, 0.03, 0.02, 0.25, 0.5).unwrap();
    let config = SimulationConfig::new(32, 50_000, 7).unwrap();
    let report = cross_validate(&params, &config).unwrap();

    assert_relative_eq!(report.call.analytic.price, 9.831948725700414, epsilon = 1e-9);
    assert_relative_eq!(report.put.analytic.price, 4.412599613074562, epsilon = 1e-9);
    assert!(report.all_within(4.0), "{:?}", report);
}

// ============================================================================
// Reproducibility and Boundaries
// ============================================================================

#[test]
fn test_identical_reruns() {
    let params = reference_params();
    let config = SimulationConfig::new(64, 2_000, 5000).unwrap();

    let a = simulate_with_seed(&params, &config).unwrap();
    let b = simulate_with_seed(&params, &config).unwrap();
    assert_eq!(a, b);

    let pricer = MonteCarloPricer::new(config);
    assert_eq!(
        pricer.price_european(&params).unwrap(),
        pricer.price_european(&params).unwrap()
    );
}

#[test]
fn test_single_path_is_insufficient() {
    let config = SimulationConfig::new(256, 1, 5000).unwrap();
    let err = MonteCarloPricer::new(config)
        .price_european(&reference_params())
        .unwrap_err();
    assert!(matches!(
        err,
        PricingError::InsufficientSamples {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_zero_volatility_or_maturity_rejected() {
    assert!(matches!(
        BlackScholes::from_inputs(100.0, 140.0, 0.05, 0.0, 0.0, 1.0),
        Err(PricingError::InvalidConfig { .. })
    ));
    assert!(matches!(
        BlackScholes::from_inputs(100.0, 140.0, 0.05, 0.0, 0.4, 0.0),
        Err(PricingError::InvalidConfig { .. })
    ));
    assert!(matches!(
        MarketParameters::new(100.0, 140.0, 0.05, 0.0, 0.0, 1.0),
        Err(PricingError::InvalidConfig { .. })
    ));
}
