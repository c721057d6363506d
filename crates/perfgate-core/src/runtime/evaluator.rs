// perfgate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: PerfGate Rule Evaluator
// Description: Pure evaluation of rule definitions against sample sets.
// Purpose: Convert rules and samples into severities and violation records.
// Dependencies: crate::{core, interfaces}, verdict-logic
// ============================================================================

//! ## Overview
//! Rule evaluation is a pure function of the rule and the sample set. Known
//! data problems (a missing aggregation, a non-numeric sample value) become
//! violations, never errors; only custom-rule delegation can fault, and the
//! fault surfaces as an explicit value for the coordinator to absorb.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use verdict_logic::CombineOp;
use verdict_logic::Severity;
use verdict_logic::ViolationClass;

use crate::core::ComparisonOp;
use crate::core::MetricName;
use crate::core::RuleDefinition;
use crate::core::RuleEvaluation;
use crate::core::RuleId;
use crate::core::RuleKind;
use crate::core::SampleSet;
use crate::core::THROUGHPUT_AGGREGATION;
use crate::core::Violation;
use crate::interfaces::EvaluationRulesProvider;

// ============================================================================
// SECTION: Evaluation Fault
// ============================================================================

/// Fault raised when a rule's evaluator cannot produce a result.
///
/// Faults are values, not unwinds: the coordinator converts each fault into
/// one critical violation naming the rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule {rule_id} evaluation fault: {message}")]
pub struct EvaluationFault {
    /// Identifier of the faulting rule.
    pub rule_id: RuleId,
    /// Fault description.
    pub message: String,
}

// ============================================================================
// SECTION: Rule Evaluation
// ============================================================================

/// Evaluates one rule against a sample set.
///
/// Built-in rule kinds are evaluated in-core and never fault; custom rules
/// are delegated to the rules provider.
///
/// # Errors
///
/// Returns [`EvaluationFault`] when a custom evaluator fails or is not
/// registered.
pub fn evaluate_rule<R>(
    rule: &RuleDefinition,
    samples: &SampleSet,
    provider: &R,
) -> Result<RuleEvaluation, EvaluationFault>
where
    R: EvaluationRulesProvider + ?Sized,
{
    match &rule.kind {
        RuleKind::Threshold {
            metric,
            aggregation,
            operator,
            threshold,
        } => Ok(evaluate_threshold(
            &rule.rule_id,
            metric,
            aggregation,
            *operator,
            *threshold,
            samples,
        )),
        RuleKind::Range {
            metric,
            aggregation,
            lower,
            upper,
        } => Ok(evaluate_range(&rule.rule_id, metric, aggregation, *lower, *upper, samples)),
        RuleKind::Composite {
            op,
            rules,
        } => evaluate_composite(*op, rules, samples, provider),
        RuleKind::Custom {
            ..
        } => provider.evaluate_rule(rule, samples).map_err(|err| EvaluationFault {
            rule_id: rule.rule_id.clone(),
            message: err.to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Threshold Evaluation
// ============================================================================

/// Evaluates a threshold rule against the sample set.
fn evaluate_threshold(
    rule_id: &RuleId,
    metric: &MetricName,
    aggregation: &str,
    operator: ComparisonOp,
    threshold: f64,
    samples: &SampleSet,
) -> RuleEvaluation {
    let expected = format!("{operator} {threshold}");
    let Some(value) = lookup_aggregation(samples, metric, aggregation) else {
        return missing_aggregation(rule_id, metric, aggregation, expected);
    };

    if operator.holds(value, threshold) {
        return RuleEvaluation::pass();
    }

    let violation = Violation {
        rule_id: rule_id.clone(),
        metric: metric.clone(),
        actual: value,
        expected,
        message: format!(
            "{metric}.{aggregation} observed {value}, expected {operator} {threshold}"
        ),
        class: ViolationClass::Critical,
    };
    RuleEvaluation::fail(Severity::Fail, vec![violation])
}

// ============================================================================
// SECTION: Range Evaluation
// ============================================================================

/// Evaluates a range rule with exclusive bounds against the sample set.
fn evaluate_range(
    rule_id: &RuleId,
    metric: &MetricName,
    aggregation: &str,
    lower: f64,
    upper: f64,
    samples: &SampleSet,
) -> RuleEvaluation {
    let expected = format!("within ({lower}, {upper}) exclusive");
    let Some(value) = lookup_aggregation(samples, metric, aggregation) else {
        return missing_aggregation(rule_id, metric, aggregation, expected);
    };

    if value.is_nan() {
        let violation = Violation {
            rule_id: rule_id.clone(),
            metric: metric.clone(),
            actual: value,
            expected,
            message: format!("{metric}.{aggregation} is not a number"),
            class: ViolationClass::Critical,
        };
        return RuleEvaluation::fail(Severity::Fail, vec![violation]);
    }

    if value > lower && value < upper {
        return RuleEvaluation::pass();
    }

    let (class, bound_text) = if value <= lower {
        (ViolationClass::Critical, format!("at or below exclusive lower bound {lower}"))
    } else if aggregation.eq_ignore_ascii_case(THROUGHPUT_AGGREGATION) {
        // Throughput upper-bound overshoot is treated as a warning, not a failure.
        (ViolationClass::NonCritical, format!("at or above exclusive upper bound {upper}"))
    } else {
        (ViolationClass::Critical, format!("at or above exclusive upper bound {upper}"))
    };

    let severity = class.severity();
    let violation = Violation {
        rule_id: rule_id.clone(),
        metric: metric.clone(),
        actual: value,
        expected,
        message: format!("{metric}.{aggregation} observed {value}, {bound_text}"),
        class,
    };
    RuleEvaluation::fail(severity, vec![violation])
}

// ============================================================================
// SECTION: Composite Evaluation
// ============================================================================

/// Evaluates a composite rule by combining child evaluations.
fn evaluate_composite<R>(
    op: CombineOp,
    rules: &[RuleDefinition],
    samples: &SampleSet,
    provider: &R,
) -> Result<RuleEvaluation, EvaluationFault>
where
    R: EvaluationRulesProvider + ?Sized,
{
    let mut children = Vec::with_capacity(rules.len());
    for rule in rules {
        children.push(evaluate_rule(rule, samples, provider)?);
    }

    let combined =
        op.combine(children.iter().map(|child| (child.passed, child.severity)));
    if combined.passed {
        return Ok(RuleEvaluation::pass());
    }

    let violations =
        children.into_iter().flat_map(|child| child.violations).collect();
    Ok(RuleEvaluation::fail(combined.severity, violations))
}

// ============================================================================
// SECTION: Lookup Helpers
// ============================================================================

/// Looks up an aggregation value for a metric, case-insensitively.
fn lookup_aggregation(samples: &SampleSet, metric: &MetricName, aggregation: &str) -> Option<f64> {
    samples
        .sample(metric)
        .and_then(|sample| sample.aggregation(aggregation))
        .map(|value| value.value)
}

/// Builds the failing evaluation for an aggregation that was not found.
fn missing_aggregation(
    rule_id: &RuleId,
    metric: &MetricName,
    aggregation: &str,
    expected: String,
) -> RuleEvaluation {
    let violation = Violation {
        rule_id: rule_id.clone(),
        metric: metric.clone(),
        actual: f64::NAN,
        expected,
        message: format!("aggregation not found: {metric}.{aggregation}"),
        class: ViolationClass::Critical,
    };
    RuleEvaluation::fail(Severity::Fail, vec![violation])
}
