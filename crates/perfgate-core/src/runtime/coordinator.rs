// perfgate-core/src/runtime/coordinator.rs
// ============================================================================
// Module: PerfGate Evaluation Coordinator
// Description: Deterministic rule sweep with fault absorption.
// Purpose: Evaluate arbitrary rule sets in a canonical, fail-soft order.
// Dependencies: crate::{core, interfaces, runtime::evaluator}, verdict-logic
// ============================================================================

//! ## Overview
//! The coordinator imposes a deterministic order on rule evaluation: rules
//! execute in byte-wise identifier order, and the final violation list is
//! re-sorted into canonical `(rule id, metric name)` order. Rules whose
//! required metrics are missing are skipped without emitting violations
//! (absence is the completeness report's concern); a faulting evaluator
//! becomes one synthetic critical violation rather than aborting the sweep.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use verdict_logic::ViolationClass;

use crate::core::MetricName;
use crate::core::RuleDefinition;
use crate::core::RuleEvalRecord;
use crate::core::RuleEvalStatus;
use crate::core::SampleSet;
use crate::core::Violation;
use crate::core::sort_canonical;
use crate::interfaces::EvaluationRulesProvider;
use crate::runtime::evaluator::EvaluationFault;
use crate::runtime::evaluator::evaluate_rule;

// ============================================================================
// SECTION: Sweep Result
// ============================================================================

/// Collected result of one deterministic rule sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSweep {
    /// Violations in canonical `(rule id, metric name)` order.
    pub violations: Vec<Violation>,
    /// Per-rule records in execution order.
    pub records: Vec<RuleEvalRecord>,
}

// ============================================================================
// SECTION: Rule Sweep
// ============================================================================

/// Evaluates a rule set against a sample set in deterministic order.
///
/// Execution order is byte-wise rule-identifier order regardless of input
/// order; output order is the canonical violation sort. Evaluation faults
/// are absorbed as synthetic critical violations.
#[must_use]
pub fn evaluate_rules<R>(
    rules: &[RuleDefinition],
    samples: &SampleSet,
    provider: &R,
) -> EvaluationSweep
where
    R: EvaluationRulesProvider + ?Sized,
{
    let mut ordered: Vec<&RuleDefinition> = rules.iter().collect();
    ordered.sort_by(|left, right| {
        left.rule_id.as_str().as_bytes().cmp(right.rule_id.as_str().as_bytes())
    });

    let available: BTreeSet<MetricName> = samples.metric_names().into_iter().collect();

    let mut violations = Vec::new();
    let mut records = Vec::with_capacity(ordered.len());

    for rule in ordered {
        let required = rule.required_metrics();
        if required.iter().any(|metric| !available.contains(metric)) {
            records.push(RuleEvalRecord {
                rule_id: rule.rule_id.clone(),
                status: RuleEvalStatus::Skipped,
            });
            continue;
        }

        match evaluate_rule(rule, samples, provider) {
            Ok(evaluation) => {
                violations.extend(evaluation.violations);
                records.push(RuleEvalRecord {
                    rule_id: rule.rule_id.clone(),
                    status: RuleEvalStatus::Evaluated,
                });
            }
            Err(fault) => {
                violations.push(fault_violation(rule, &fault));
                records.push(RuleEvalRecord {
                    rule_id: rule.rule_id.clone(),
                    status: RuleEvalStatus::Faulted,
                });
            }
        }
    }

    sort_canonical(&mut violations);

    EvaluationSweep {
        violations,
        records,
    }
}

// ============================================================================
// SECTION: Fault Conversion
// ============================================================================

/// Converts an evaluation fault into one synthetic critical violation.
///
/// The violation carries the rule's first required metric (empty when the
/// rule requires none) so canonical ordering stays total.
fn fault_violation(rule: &RuleDefinition, fault: &EvaluationFault) -> Violation {
    let metric = rule
        .required_metrics()
        .into_iter()
        .next()
        .unwrap_or_else(|| MetricName::new(""));

    Violation {
        rule_id: rule.rule_id.clone(),
        metric,
        actual: f64::NAN,
        expected: "successful evaluation".to_string(),
        message: fault.message.clone(),
        class: ViolationClass::Critical,
    }
}
