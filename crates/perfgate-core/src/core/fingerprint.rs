// perfgate-core/src/core/fingerprint.rs
// ============================================================================
// Module: PerfGate Data Fingerprints
// Description: Canonical serialization and hashing of evaluated sample data.
// Purpose: Bind each verdict to the exact sample content that produced it.
// Dependencies: crate::core::metrics, serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Fingerprints are SHA-256 digests over an RFC 8785 (JCS) canonical JSON
//! serialization of the sample data used for evaluation. Samples and their
//! aggregation entries are first sorted into a total, content-derived order,
//! so two content-identical sample sets produce the identical digest
//! regardless of collection order, while any single changed value produces a
//! different digest. Nothing from the evaluation run itself (timestamps,
//! execution ids) enters the digest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::metrics::AggregatedMetricValue;
use crate::core::metrics::MetricSample;
use crate::core::metrics::SampleSet;

// ============================================================================
// SECTION: Fingerprint Algorithm
// ============================================================================

/// Supported fingerprint algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerprintAlgorithm {
    /// SHA-256 hashing (FIPS-friendly default).
    Sha256,
}

/// Default fingerprint algorithm.
pub const DEFAULT_FINGERPRINT_ALGORITHM: FingerprintAlgorithm = FingerprintAlgorithm::Sha256;

// ============================================================================
// SECTION: Fingerprint Value
// ============================================================================

/// Content-derived fingerprint of a sample set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFingerprint {
    /// Fingerprint algorithm identifier.
    pub algorithm: FingerprintAlgorithm,
    /// Lowercase hex-encoded digest bytes.
    pub value: String,
}

impl DataFingerprint {
    /// Creates a new fingerprint from raw digest bytes.
    #[must_use]
    pub fn new(algorithm: FingerprintAlgorithm, bytes: &[u8]) -> Self {
        Self {
            algorithm,
            value: hex_encode(bytes),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing fingerprints.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// Canonical JSON serialization failed (for example a NaN sample value).
    #[error("failed to canonicalize sample data: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Fingerprint Computation
// ============================================================================

/// Computes the fingerprint of a sample set under the given algorithm.
///
/// # Errors
///
/// Returns [`FingerprintError::Canonicalization`] when the sample data
/// cannot be represented as canonical JSON.
pub fn fingerprint_samples(
    algorithm: FingerprintAlgorithm,
    samples: &SampleSet,
) -> Result<DataFingerprint, FingerprintError> {
    let canonical = canonical_samples(samples);
    let bytes = serde_jcs::to_vec(&canonical)
        .map_err(|err| FingerprintError::Canonicalization(err.to_string()))?;
    Ok(digest_bytes(algorithm, &bytes))
}

/// Returns the sample set in canonical, content-derived order.
fn canonical_samples(samples: &SampleSet) -> Vec<MetricSample> {
    let mut canonical: Vec<MetricSample> = samples.samples().to_vec();
    for sample in &mut canonical {
        sample.values.sort_by(AggregatedMetricValue::canonical_cmp);
    }
    canonical.sort_by(MetricSample::canonical_cmp);
    canonical
}

/// Hashes raw bytes under the given algorithm.
fn digest_bytes(algorithm: FingerprintAlgorithm, bytes: &[u8]) -> DataFingerprint {
    match algorithm {
        FingerprintAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            let digest = hasher.finalize();
            DataFingerprint::new(FingerprintAlgorithm::Sha256, &digest)
        }
    }
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::DEFAULT_FINGERPRINT_ALGORITHM;
    use super::fingerprint_samples;
    use crate::core::metrics::AggregatedMetricValue;
    use crate::core::metrics::MetricSample;
    use crate::core::metrics::SampleSet;

    fn sample(metric: &str, aggregation: &str, value: f64) -> MetricSample {
        MetricSample::new(metric, vec![AggregatedMetricValue::new(aggregation, value, "ms")])
    }

    #[test]
    fn permuted_sample_sets_share_a_fingerprint() {
        let forward = SampleSet::new(vec![
            sample("latency", "p95", 250.0),
            sample("errorRate", "average", 2.0),
        ]);
        let reversed = SampleSet::new(vec![
            sample("errorRate", "average", 2.0),
            sample("latency", "p95", 250.0),
        ]);

        let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &forward);
        let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &reversed);
        assert_eq!(left.ok(), right.ok());
    }

    #[test]
    fn changed_value_changes_the_fingerprint() {
        let base = SampleSet::new(vec![sample("latency", "p95", 250.0)]);
        let changed = SampleSet::new(vec![sample("latency", "p95", 250.1)]);

        let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &base);
        let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &changed);
        assert_ne!(left.ok(), right.ok());
    }
}
