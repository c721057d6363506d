// perfgate-core/tests/completeness.rs
// ============================================================================
// Module: Completeness Assessment Tests
// Description: Required-versus-available metric arithmetic.
// Purpose: Ensure completeness reports quantify coverage correctly.
// Dependencies: perfgate-core
// ============================================================================
//! ## Overview
//! Validates coverage counting, the missing-metric set, and the
//! unevaluated-rule intersection.

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

use perfgate_core::ComparisonOp;
use perfgate_core::MetricName;
use perfgate_core::RuleDefinition;
use perfgate_core::RuleId;
use perfgate_core::RuleKind;
use perfgate_core::runtime::assess_completeness;

fn threshold(rule_id: &str, metric: &str) -> RuleDefinition {
    RuleDefinition {
        rule_id: rule_id.into(),
        name: rule_id.to_string(),
        description: String::new(),
        kind: RuleKind::Threshold {
            metric: metric.into(),
            aggregation: "average".to_string(),
            operator: ComparisonOp::LessThan,
            threshold: 100.0,
        },
    }
}

fn names(values: &[&str]) -> Vec<MetricName> {
    values.iter().map(|value| MetricName::new(*value)).collect()
}

// ============================================================================
// SECTION: Coverage Arithmetic
// ============================================================================

/// Verifies counts and ratio for a partially covered rule set.
#[test]
fn partial_coverage_arithmetic() {
    let rules: Vec<RuleDefinition> = (0..10)
        .map(|index| threshold(&format!("rule-{index}"), &format!("metric-{index}")))
        .collect();
    let available = names(&["metric-0", "metric-1", "metric-2", "metric-3"]);

    let report = assess_completeness(&rules, &available);
    assert_eq!(report.expected_count, 10);
    assert_eq!(report.provided_count, 4);
    assert!((report.ratio - 0.4).abs() < f64::EPSILON);
    assert_eq!(report.missing.len(), 6);
    assert_eq!(report.unevaluated_rules.len(), 6);
}

/// Verifies a rule is unevaluated when any required metric is missing.
#[test]
fn unevaluated_rules_intersect_missing_metrics() {
    let composite = RuleDefinition {
        rule_id: "composite".into(),
        name: "composite".to_string(),
        description: String::new(),
        kind: RuleKind::Composite {
            op: perfgate_core::CombineOp::All,
            rules: vec![threshold("child-a", "latency"), threshold("child-b", "errorRate")],
        },
    };
    let rules = vec![composite, threshold("solo", "latency")];
    let available = names(&["latency"]);

    let report = assess_completeness(&rules, &available);
    assert_eq!(report.missing, names(&["errorRate"]));
    assert_eq!(report.unevaluated_rules, vec![RuleId::new("composite")]);
    assert_eq!(report.expected_count, 2);
    assert_eq!(report.provided_count, 1);
}

/// Verifies missing metrics and rule ids come back sorted.
#[test]
fn missing_lists_are_sorted() {
    let rules = vec![
        threshold("zeta", "zulu"),
        threshold("alpha", "yankee"),
        threshold("mid", "xray"),
    ];
    let report = assess_completeness(&rules, &[]);

    assert_eq!(report.missing, names(&["xray", "yankee", "zulu"]));
    assert_eq!(
        report.unevaluated_rules,
        vec![RuleId::new("alpha"), RuleId::new("mid"), RuleId::new("zeta")]
    );
}

/// Verifies an empty requirement set is fully complete.
#[test]
fn empty_requirements_are_complete() {
    let report = assess_completeness(&[], &names(&["latency"]));
    assert_eq!(report.expected_count, 0);
    assert_eq!(report.provided_count, 0);
    assert!((report.ratio - 1.0).abs() < f64::EPSILON);
    assert!(report.missing.is_empty());
    assert!(report.unevaluated_rules.is_empty());
}
