// perfgate-core/src/core/violation.rs
// ============================================================================
// Module: PerfGate Violation Records
// Description: Immutable violation evidence with canonical ordering.
// Purpose: Record rule failures in a stable, environment-independent order.
// Dependencies: crate::core::identifiers, serde, verdict-logic
// ============================================================================

//! ## Overview
//! Violations are the evidence that a rule's condition was not satisfied.
//! They are immutable once built and always reported in canonical
//! `(rule id, metric name)` byte-wise order so output is independent of rule
//! input order and of any evaluation schedule.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use verdict_logic::Severity;
use verdict_logic::ViolationClass;

use crate::core::identifiers::MetricName;
use crate::core::identifiers::RuleId;

// ============================================================================
// SECTION: Violation
// ============================================================================

/// Evidence that a rule's condition was not satisfied.
///
/// # Invariants
/// - Immutable once built; `actual` may be NaN when the aggregation the rule
///   targets was not present in the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the violated rule.
    pub rule_id: RuleId,
    /// Metric the violated condition was evaluated against.
    pub metric: MetricName,
    /// Observed aggregation value.
    pub actual: f64,
    /// Rendered form of the expected condition.
    pub expected: String,
    /// Human-readable violation message.
    pub message: String,
    /// Classification driving WARN/FAIL discrimination.
    pub class: ViolationClass,
}

impl Violation {
    /// Returns the severity implied by the violation classification.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.class.severity()
    }
}

// ============================================================================
// SECTION: Canonical Ordering
// ============================================================================

/// Sorts violations into canonical `(rule id, metric name)` byte-wise order.
pub fn sort_canonical(violations: &mut [Violation]) {
    violations.sort_by(|left, right| {
        left.rule_id
            .as_str()
            .as_bytes()
            .cmp(right.rule_id.as_str().as_bytes())
            .then_with(|| {
                left.metric.as_str().as_bytes().cmp(right.metric.as_str().as_bytes())
            })
    });
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use verdict_logic::ViolationClass;

    use super::Violation;
    use super::sort_canonical;

    fn violation(rule_id: &str, metric: &str) -> Violation {
        Violation {
            rule_id: rule_id.into(),
            metric: metric.into(),
            actual: 1.0,
            expected: "< 2".to_string(),
            message: "observed 1 violates < 2".to_string(),
            class: ViolationClass::Critical,
        }
    }

    #[test]
    fn sort_orders_by_rule_then_metric() {
        let mut violations = vec![
            violation("rule-b", "latency"),
            violation("rule-a", "throughput"),
            violation("rule-a", "errorRate"),
        ];
        sort_canonical(&mut violations);
        let keys: Vec<(&str, &str)> = violations
            .iter()
            .map(|entry| (entry.rule_id.as_str(), entry.metric.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("rule-a", "errorRate"), ("rule-a", "throughput"), ("rule-b", "latency")]
        );
    }
}
