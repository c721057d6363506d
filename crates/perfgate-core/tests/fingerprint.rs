// perfgate-core/tests/fingerprint.rs
// ============================================================================
// Module: Data Fingerprint Tests
// Description: Content-derived digests over sample sets.
// Purpose: Ensure fingerprints are order-independent and value-sensitive.
// Dependencies: perfgate-core
// ============================================================================
//! ## Overview
//! Validates fingerprint idempotency, insensitivity to collection order,
//! and sensitivity to any single changed value.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use perfgate_core::AggregatedMetricValue;
use perfgate_core::DEFAULT_FINGERPRINT_ALGORITHM;
use perfgate_core::MetricSample;
use perfgate_core::SampleSet;
use perfgate_core::fingerprint_samples;

fn sample(metric: &str, values: &[(&str, f64)]) -> MetricSample {
    MetricSample::new(
        metric,
        values
            .iter()
            .map(|(aggregation, value)| AggregatedMetricValue::new(*aggregation, *value, "ms"))
            .collect(),
    )
}

/// Verifies identical inputs yield identical digests across calls.
#[test]
fn fingerprint_is_idempotent() {
    let set = SampleSet::new(vec![sample("latency", &[("p95", 250.0), ("average", 120.0)])]);

    let first = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &set).unwrap();
    let second = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &set).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.value.len(), 64);
    assert!(first.value.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

/// Verifies sample order never affects the digest.
#[test]
fn fingerprint_ignores_sample_order() {
    let forward = SampleSet::new(vec![
        sample("latency", &[("p95", 250.0)]),
        sample("errorRate", &[("average", 2.0)]),
        sample("throughput", &[("max", 910.0)]),
    ]);
    let shuffled = SampleSet::new(vec![
        sample("throughput", &[("max", 910.0)]),
        sample("errorRate", &[("average", 2.0)]),
        sample("latency", &[("p95", 250.0)]),
    ]);

    let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &forward).unwrap();
    let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &shuffled).unwrap();
    assert_eq!(left, right);
}

/// Verifies aggregation order within a sample never affects the digest.
#[test]
fn fingerprint_ignores_aggregation_order() {
    let forward = SampleSet::new(vec![sample("latency", &[("average", 120.0), ("p95", 250.0)])]);
    let reversed = SampleSet::new(vec![sample("latency", &[("p95", 250.0), ("average", 120.0)])]);

    let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &forward).unwrap();
    let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &reversed).unwrap();
    assert_eq!(left, right);
}

/// Verifies one changed numeric value changes the digest.
#[test]
fn fingerprint_detects_single_value_change() {
    let base = SampleSet::new(vec![
        sample("latency", &[("p95", 250.0)]),
        sample("errorRate", &[("average", 2.0)]),
    ]);
    let changed = SampleSet::new(vec![
        sample("latency", &[("p95", 250.0)]),
        sample("errorRate", &[("average", 2.5)]),
    ]);

    let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &base).unwrap();
    let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &changed).unwrap();
    assert_ne!(left, right);
}

/// Verifies renaming a metric changes the digest.
#[test]
fn fingerprint_detects_renamed_metric() {
    let base = SampleSet::new(vec![sample("latency", &[("p95", 250.0)])]);
    let renamed = SampleSet::new(vec![sample("latency_ms", &[("p95", 250.0)])]);

    let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &base).unwrap();
    let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &renamed).unwrap();
    assert_ne!(left, right);
}
