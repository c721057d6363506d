// perfgate-core/src/runtime/completeness.rs
// ============================================================================
// Module: PerfGate Completeness Assessment
// Description: Required-versus-available metric arithmetic.
// Purpose: Quantify how much of the rule set the supplied data can support.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Completeness assessment compares the union of metrics the rule set
//! requires against the metrics actually supplied. The resulting report
//! feeds outcome aggregation: a coverage ratio below the inconclusive
//! threshold overrides every other signal. Assessment is a pure function and
//! never fails; missing data degrades the report, not the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::CompletenessReport;
use crate::core::MetricName;
use crate::core::RuleDefinition;
use crate::core::RuleId;

// ============================================================================
// SECTION: Completeness Assessment
// ============================================================================

/// Assesses data completeness for a rule set against available metric names.
///
/// The ratio is `provided / expected`, or 1.0 when the rule set requires no
/// metrics at all.
#[must_use]
pub fn assess_completeness(
    rules: &[RuleDefinition],
    available: &[MetricName],
) -> CompletenessReport {
    let available: BTreeSet<&MetricName> = available.iter().collect();

    let mut required: BTreeSet<MetricName> = BTreeSet::new();
    for rule in rules {
        required.extend(rule.required_metrics());
    }

    let missing: Vec<MetricName> =
        required.iter().filter(|metric| !available.contains(*metric)).cloned().collect();
    let missing_set: BTreeSet<&MetricName> = missing.iter().collect();

    let mut unevaluated_rules: Vec<RuleId> = rules
        .iter()
        .filter(|rule| {
            rule.required_metrics().iter().any(|metric| missing_set.contains(metric))
        })
        .map(|rule| rule.rule_id.clone())
        .collect();
    unevaluated_rules.sort();
    unevaluated_rules.dedup();

    let expected_count = required.len();
    let provided_count = expected_count - missing.len();
    #[allow(clippy::cast_precision_loss, reason = "Metric counts are far below 2^52.")]
    let ratio = if expected_count == 0 {
        1.0
    } else {
        provided_count as f64 / expected_count as f64
    };

    CompletenessReport {
        expected_count,
        provided_count,
        ratio,
        missing,
        unevaluated_rules,
    }
}
