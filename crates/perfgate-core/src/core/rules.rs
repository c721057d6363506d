// perfgate-core/src/core/rules.rs
// ============================================================================
// Module: PerfGate Rule Specifications
// Description: Declarative rule definitions with validation helpers.
// Purpose: Define the closed rule vocabulary evaluated against metric samples.
// Dependencies: crate::core::{identifiers, violation}, serde, verdict-logic
// ============================================================================

//! ## Overview
//! Rules are immutable, deterministic predicates over aggregated metric
//! values: the same sample in always produces the same result out. The rule
//! vocabulary is a closed sum type (threshold, range, composite, custom) so
//! composite rules can hold heterogeneous children while the evaluator can
//! match exhaustively. Invalid shapes (an empty range span, an empty
//! composite) are rejected at validation time, not silently accepted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use verdict_logic::CombineOp;
use verdict_logic::Severity;

use crate::core::identifiers::MetricName;
use crate::core::identifiers::RuleId;
use crate::core::violation::Violation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Tolerance applied to equality and inequality comparisons.
pub const EQUALITY_EPSILON: f64 = 0.001;

/// Aggregation name whose upper-bound range violations are downgraded to WARN.
///
/// Matched ASCII case-insensitively, consistent with aggregation lookup.
/// This hard-coded special case is preserved for compatibility with existing
/// rule sets; an explicit per-rule severity field should eventually replace it.
pub const THROUGHPUT_AGGREGATION: &str = "Throughput";

// ============================================================================
// SECTION: Comparison Operators
// ============================================================================

/// Comparison operator applied by threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    /// Actual must be strictly less than the threshold.
    LessThan,
    /// Actual must be less than or equal to the threshold.
    LessThanOrEqual,
    /// Actual must be strictly greater than the threshold.
    GreaterThan,
    /// Actual must be greater than or equal to the threshold.
    GreaterThanOrEqual,
    /// Actual must equal the threshold within [`EQUALITY_EPSILON`].
    Equal,
    /// Actual must differ from the threshold by at least [`EQUALITY_EPSILON`].
    NotEqual,
}

impl ComparisonOp {
    /// Returns true when `actual` satisfies the operator against `threshold`.
    ///
    /// Equality and inequality use [`EQUALITY_EPSILON`] to avoid
    /// floating-point false negatives; ordering operators compare directly.
    #[must_use]
    pub fn holds(self, actual: f64, threshold: f64) -> bool {
        match self {
            Self::LessThan => actual < threshold,
            Self::LessThanOrEqual => actual <= threshold,
            Self::GreaterThan => actual > threshold,
            Self::GreaterThanOrEqual => actual >= threshold,
            Self::Equal => (actual - threshold).abs() < EQUALITY_EPSILON,
            Self::NotEqual => (actual - threshold).abs() >= EQUALITY_EPSILON,
        }
    }

    /// Returns the operator symbol used in rendered expectations.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// SECTION: Rule Definitions
// ============================================================================

/// Declarative rule definition evaluated against metric samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Stable rule identifier.
    pub rule_id: RuleId,
    /// Display name for reports.
    pub name: String,
    /// Description of what the rule asserts.
    pub description: String,
    /// Rule variant with its parameters.
    pub kind: RuleKind,
}

/// Closed set of rule variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Compares one aggregation against a fixed threshold.
    Threshold {
        /// Metric the rule reads.
        metric: MetricName,
        /// Aggregation name looked up case-insensitively within the sample.
        aggregation: String,
        /// Comparison operator.
        operator: ComparisonOp,
        /// Threshold value.
        threshold: f64,
    },
    /// Requires one aggregation to fall strictly between two bounds.
    Range {
        /// Metric the rule reads.
        metric: MetricName,
        /// Aggregation name looked up case-insensitively within the sample.
        aggregation: String,
        /// Exclusive lower bound.
        lower: f64,
        /// Exclusive upper bound.
        upper: f64,
    },
    /// Logical combination of heterogeneous sub-rules.
    Composite {
        /// Combination operator.
        op: CombineOp,
        /// Ordered sub-rules.
        rules: Vec<RuleDefinition>,
    },
    /// Provider-evaluated rule variant (registered extension point).
    Custom {
        /// Evaluator identifier registered with the rules provider.
        evaluator: String,
        /// Metrics the evaluator reads.
        metrics: Vec<MetricName>,
        /// Opaque evaluator parameters.
        params: Value,
    },
}

impl RuleDefinition {
    /// Validates the rule definition invariants, recursing into composites.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when validation fails.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.rule_id.as_str().trim().is_empty() {
            return Err(RuleError::BlankRuleId);
        }

        match &self.kind {
            RuleKind::Threshold {
                threshold, ..
            } => {
                if !threshold.is_finite() {
                    return Err(RuleError::NonFiniteThreshold(self.rule_id.to_string()));
                }
            }
            RuleKind::Range {
                lower,
                upper,
                ..
            } => {
                if !lower.is_finite() || !upper.is_finite() {
                    return Err(RuleError::NonFiniteRangeBound(self.rule_id.to_string()));
                }
                if lower >= upper {
                    return Err(RuleError::InvalidRangeSpan {
                        rule_id: self.rule_id.to_string(),
                        lower: *lower,
                        upper: *upper,
                    });
                }
            }
            RuleKind::Composite {
                rules, ..
            } => {
                if rules.is_empty() {
                    return Err(RuleError::EmptyComposite(self.rule_id.to_string()));
                }
                for rule in rules {
                    rule.validate()?;
                }
            }
            RuleKind::Custom {
                evaluator, ..
            } => {
                if evaluator.trim().is_empty() {
                    return Err(RuleError::BlankEvaluator(self.rule_id.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Returns the deduplicated metrics this rule reads, sorted byte-wise.
    #[must_use]
    pub fn required_metrics(&self) -> Vec<MetricName> {
        let mut out = Vec::new();
        collect_required_metrics(self, &mut out);
        out.sort();
        out.dedup();
        out
    }
}

/// Walks a rule tree and appends required metric names.
fn collect_required_metrics(rule: &RuleDefinition, out: &mut Vec<MetricName>) {
    match &rule.kind {
        RuleKind::Threshold {
            metric, ..
        }
        | RuleKind::Range {
            metric, ..
        } => out.push(metric.clone()),
        RuleKind::Composite {
            rules, ..
        } => {
            for child in rules {
                collect_required_metrics(child, out);
            }
        }
        RuleKind::Custom {
            metrics, ..
        } => out.extend(metrics.iter().cloned()),
    }
}

/// Ensures rule identifiers are unique within a rule set.
///
/// # Errors
///
/// Returns [`RuleError::DuplicateRuleId`] when two rules share an identifier.
pub fn ensure_unique_rule_ids(rules: &[RuleDefinition]) -> Result<(), RuleError> {
    for (index, rule) in rules.iter().enumerate() {
        if rules.iter().skip(index + 1).any(|other| other.rule_id == rule.rule_id) {
            return Err(RuleError::DuplicateRuleId(rule.rule_id.to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Rule Evaluation Result
// ============================================================================

/// Outcome of evaluating one rule against a sample set.
///
/// # Invariants
/// - `severity` is `Severity::Pass` and `violations` is empty when `passed`
///   is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    /// Whether the rule condition was satisfied.
    pub passed: bool,
    /// Severity of the evaluation result.
    pub severity: Severity,
    /// Violations produced by the evaluation.
    pub violations: Vec<Violation>,
}

impl RuleEvaluation {
    /// Creates a passing evaluation with no violations.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            severity: Severity::Pass,
            violations: Vec::new(),
        }
    }

    /// Creates a failing evaluation from collected violations.
    #[must_use]
    pub const fn fail(severity: Severity, violations: Vec<Violation>) -> Self {
        Self {
            passed: false,
            severity,
            violations,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rule definition validation errors.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule identifier is empty or whitespace-only.
    #[error("rule identifier must not be blank")]
    BlankRuleId,
    /// Threshold value is NaN or infinite.
    #[error("rule {0} has a non-finite threshold")]
    NonFiniteThreshold(String),
    /// Range bound is NaN or infinite.
    #[error("rule {0} has a non-finite range bound")]
    NonFiniteRangeBound(String),
    /// Range lower bound does not lie strictly below the upper bound.
    #[error("rule {rule_id} has an invalid range span: lower {lower} must be below upper {upper}")]
    InvalidRangeSpan {
        /// Offending rule identifier.
        rule_id: String,
        /// Configured exclusive lower bound.
        lower: f64,
        /// Configured exclusive upper bound.
        upper: f64,
    },
    /// Composite rule has no children.
    #[error("composite rule {0} must define at least one sub-rule")]
    EmptyComposite(String),
    /// Custom rule names no evaluator.
    #[error("custom rule {0} must name an evaluator")]
    BlankEvaluator(String),
    /// Two rules share an identifier.
    #[error("duplicate rule identifier: {0}")]
    DuplicateRuleId(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
