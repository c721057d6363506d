// perfgate-core/tests/proptest_rules.rs
// ============================================================================
// Module: Rule Property-Based Tests
// Description: Property tests for operator, completeness, and fingerprint invariants.
// Purpose: Detect determinism violations across wide input ranges.
// ============================================================================

//! Property-based tests for rule evaluation invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use perfgate_core::AggregatedMetricValue;
use perfgate_core::ComparisonOp;
use perfgate_core::DEFAULT_FINGERPRINT_ALGORITHM;
use perfgate_core::EQUALITY_EPSILON;
use perfgate_core::InMemoryRulesProvider;
use perfgate_core::MetricName;
use perfgate_core::MetricSample;
use perfgate_core::RuleDefinition;
use perfgate_core::RuleKind;
use perfgate_core::SampleSet;
use perfgate_core::fingerprint_samples;
use perfgate_core::runtime::assess_completeness;
use perfgate_core::runtime::evaluate_rule;
use proptest::prelude::*;

fn range_rule(lower: f64, upper: f64) -> RuleDefinition {
    RuleDefinition {
        rule_id: "band".into(),
        name: "band".to_string(),
        description: String::new(),
        kind: RuleKind::Range {
            metric: "metric".into(),
            aggregation: "average".to_string(),
            lower,
            upper,
        },
    }
}

fn single_sample(value: f64) -> SampleSet {
    SampleSet::new(vec![MetricSample::new(
        "metric",
        vec![AggregatedMetricValue::new("average", value, "ms")],
    )])
}

proptest! {
    #[test]
    fn equality_is_symmetric_within_epsilon(
        threshold in -1.0e6_f64..1.0e6,
        delta in -1.0e-2_f64..1.0e-2,
    ) {
        let actual = threshold + delta;
        let holds = ComparisonOp::Equal.holds(actual, threshold);
        let mirrored = ComparisonOp::Equal.holds(threshold, actual);
        prop_assert_eq!(holds, mirrored);
        prop_assert_eq!(holds, (actual - threshold).abs() < EQUALITY_EPSILON);
        prop_assert_ne!(holds, ComparisonOp::NotEqual.holds(actual, threshold));
    }

    #[test]
    fn range_rejects_bounds_and_exterior(
        lower in -1.0e3_f64..0.0,
        upper in 1.0_f64..1.0e3,
        interior in 0.0_f64..1.0,
    ) {
        let provider = InMemoryRulesProvider::default();
        let rule = range_rule(lower, upper);

        let on_lower = evaluate_rule(&rule, &single_sample(lower), &provider).unwrap();
        prop_assert!(!on_lower.passed);

        let on_upper = evaluate_rule(&rule, &single_sample(upper), &provider).unwrap();
        prop_assert!(!on_upper.passed);

        let inside = evaluate_rule(&rule, &single_sample(interior), &provider).unwrap();
        prop_assert!(inside.passed);
    }

    #[test]
    fn completeness_ratio_stays_in_unit_interval(
        required in prop::collection::btree_set("[a-z]{1,6}", 1..16),
        available in prop::collection::vec("[a-z]{1,6}", 0..16),
    ) {
        let rules: Vec<RuleDefinition> = required
            .iter()
            .enumerate()
            .map(|(index, metric)| RuleDefinition {
                rule_id: format!("rule-{index}").into(),
                name: String::new(),
                description: String::new(),
                kind: RuleKind::Threshold {
                    metric: metric.as_str().into(),
                    aggregation: "average".to_string(),
                    operator: ComparisonOp::LessThan,
                    threshold: 1.0,
                },
            })
            .collect();
        let available: Vec<MetricName> =
            available.into_iter().map(MetricName::new).collect();

        let report = assess_completeness(&rules, &available);
        prop_assert!(report.ratio >= 0.0);
        prop_assert!(report.ratio <= 1.0);
        prop_assert_eq!(
            report.expected_count - report.missing.len(),
            report.provided_count
        );
    }

    #[test]
    fn fingerprint_is_permutation_invariant(
        values in prop::collection::vec(("[a-z]{1,8}", -1.0e9_f64..1.0e9), 1..12),
        seed in any::<u64>(),
    ) {
        let samples: Vec<MetricSample> = values
            .iter()
            .map(|(metric, value)| {
                MetricSample::new(
                    metric.as_str(),
                    vec![AggregatedMetricValue::new("average", *value, "ms")],
                )
            })
            .collect();

        let mut shuffled = samples.clone();
        let len = shuffled.len();
        for index in 0..len {
            #[allow(clippy::cast_possible_truncation, reason = "Index arithmetic on tiny vectors.")]
            let swap_with = (seed as usize).wrapping_add(index * 7) % len;
            shuffled.swap(index, swap_with);
        }

        let left = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &SampleSet::new(samples));
        let right = fingerprint_samples(DEFAULT_FINGERPRINT_ALGORITHM, &SampleSet::new(shuffled));
        prop_assert_eq!(left.unwrap(), right.unwrap());
    }
}
