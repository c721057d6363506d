// perfgate-core/src/core/metrics.rs
// ============================================================================
// Module: PerfGate Metric Model
// Description: Aggregated metric values and sample-set containers.
// Purpose: Provide immutable, lookup-friendly metric inputs for evaluation.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Metric samples arrive pre-aggregated from external collectors: one sample
//! per metric, carrying the named summary statistics computed over that
//! metric's raw observations. The engine treats samples as read-only values
//! for the duration of one evaluation call. Aggregation lookup is
//! ASCII case-insensitive so rule authors are not penalized for writing
//! "P95" where a collector reports "p95".

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::MetricName;

// ============================================================================
// SECTION: Aggregated Values
// ============================================================================

/// One named aggregation computed over a metric's raw observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetricValue {
    /// Aggregation name (for example "average" or "p95").
    pub aggregation: String,
    /// Numeric aggregation value.
    pub value: f64,
    /// Unit of the value (for example "ms" or "percent").
    pub unit: String,
}

impl AggregatedMetricValue {
    /// Creates a new aggregated value.
    #[must_use]
    pub fn new(aggregation: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            aggregation: aggregation.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Total, content-derived ordering used for canonical serialization.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.aggregation
            .as_bytes()
            .cmp(other.aggregation.as_bytes())
            .then_with(|| self.unit.as_bytes().cmp(other.unit.as_bytes()))
            .then_with(|| self.value.total_cmp(&other.value))
    }
}

// ============================================================================
// SECTION: Metric Samples
// ============================================================================

/// Collected sample for one metric with its computed aggregations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Metric this sample belongs to.
    pub metric: MetricName,
    /// Aggregations computed over the metric's observations.
    pub values: Vec<AggregatedMetricValue>,
}

impl MetricSample {
    /// Creates a new metric sample.
    #[must_use]
    pub fn new(metric: impl Into<MetricName>, values: Vec<AggregatedMetricValue>) -> Self {
        Self {
            metric: metric.into(),
            values,
        }
    }

    /// Looks up an aggregation by name, ASCII case-insensitively.
    #[must_use]
    pub fn aggregation(&self, name: &str) -> Option<&AggregatedMetricValue> {
        self.values.iter().find(|value| value.aggregation.eq_ignore_ascii_case(name))
    }

    /// Total, content-derived ordering used for canonical serialization.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.metric
            .as_str()
            .as_bytes()
            .cmp(other.metric.as_str().as_bytes())
            .then_with(|| cmp_value_slices(&self.values, &other.values))
    }
}

/// Lexicographic comparison of aggregated-value slices.
fn cmp_value_slices(left: &[AggregatedMetricValue], right: &[AggregatedMetricValue]) -> Ordering {
    for (lhs, rhs) in left.iter().zip(right.iter()) {
        let ordering = lhs.canonical_cmp(rhs);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

// ============================================================================
// SECTION: Sample Set
// ============================================================================

/// Immutable set of metric samples used for one evaluation call.
///
/// # Invariants
/// - Lookup by metric name returns the first matching sample; providers are
///   expected to supply at most one sample per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Samples in provider-supplied order.
    samples: Vec<MetricSample>,
}

impl SampleSet {
    /// Creates a new sample set.
    #[must_use]
    pub const fn new(samples: Vec<MetricSample>) -> Self {
        Self {
            samples,
        }
    }

    /// Returns the sample for a metric, if present.
    #[must_use]
    pub fn sample(&self, metric: &MetricName) -> Option<&MetricSample> {
        self.samples.iter().find(|sample| &sample.metric == metric)
    }

    /// Returns true when a sample exists for the metric.
    #[must_use]
    pub fn contains(&self, metric: &MetricName) -> bool {
        self.sample(metric).is_some()
    }

    /// Returns the deduplicated metric names, sorted byte-wise.
    #[must_use]
    pub fn metric_names(&self) -> Vec<MetricName> {
        let mut names: Vec<MetricName> =
            self.samples.iter().map(|sample| sample.metric.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Returns the samples in provider-supplied order.
    #[must_use]
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    /// Returns true when the set holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::AggregatedMetricValue;
    use super::MetricSample;
    use super::SampleSet;
    use crate::core::identifiers::MetricName;

    #[test]
    fn aggregation_lookup_is_case_insensitive() {
        let sample = MetricSample::new(
            "latency",
            vec![AggregatedMetricValue::new("p95", 250.0, "ms")],
        );
        assert!(sample.aggregation("P95").is_some());
        assert!(sample.aggregation("p99").is_none());
    }

    #[test]
    fn metric_names_are_sorted_and_deduplicated() {
        let set = SampleSet::new(vec![
            MetricSample::new("throughput", Vec::new()),
            MetricSample::new("errorRate", Vec::new()),
            MetricSample::new("throughput", Vec::new()),
        ]);
        let names = set.metric_names();
        assert_eq!(
            names,
            vec![MetricName::new("errorRate"), MetricName::new("throughput")]
        );
    }
}
