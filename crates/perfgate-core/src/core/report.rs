// perfgate-core/src/core/report.rs
// ============================================================================
// Module: PerfGate Evaluation Reports
// Description: Completeness reports, evaluation records, and final results.
// Purpose: Provide the immutable, fully traceable result of one evaluation.
// Dependencies: crate::core::{fingerprint, identifiers, profile, time, violation}, serde, verdict-logic
// ============================================================================

//! ## Overview
//! The evaluation result is the single artifact an evaluation call returns:
//! the verdict, the violations that justify it, the completeness report that
//! qualifies it, metadata naming what was evaluated and when, and the data
//! fingerprint binding the verdict to the exact sample content. Results are
//! created once per call and never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use verdict_logic::Outcome;

use crate::core::fingerprint::DataFingerprint;
use crate::core::identifiers::ExecutionId;
use crate::core::identifiers::MetricName;
use crate::core::identifiers::RuleId;
use crate::core::profile::ExecutionContext;
use crate::core::profile::ResolvedProfile;
use crate::core::time::Timestamp;
use crate::core::violation::Violation;
use crate::core::violation::sort_canonical;

// ============================================================================
// SECTION: Completeness Report
// ============================================================================

/// Comparison of the metrics a rule set requires against those supplied.
///
/// # Invariants
/// - `missing` and `unevaluated_rules` are sorted byte-wise.
/// - `ratio` is `provided_count / expected_count`, or 1.0 when nothing is
///   expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Number of distinct metrics the rule set requires.
    pub expected_count: usize,
    /// Number of required metrics actually supplied.
    pub provided_count: usize,
    /// Completeness ratio in `[0.0, 1.0]`.
    pub ratio: f64,
    /// Required metrics that were not supplied, sorted.
    pub missing: Vec<MetricName>,
    /// Rules that could not be evaluated, sorted by identifier.
    pub unevaluated_rules: Vec<RuleId>,
}

// ============================================================================
// SECTION: Rule Evaluation Records
// ============================================================================

/// Status of one rule within an evaluation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleEvalStatus {
    /// The rule was evaluated against the sample set.
    Evaluated,
    /// The rule was skipped because a required metric was missing.
    Skipped,
    /// The rule's evaluator faulted; a synthetic violation was recorded.
    Faulted,
}

/// Per-rule record of how the sweep handled one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvalRecord {
    /// Rule identifier.
    pub rule_id: RuleId,
    /// How the sweep handled the rule.
    pub status: RuleEvalStatus,
}

// ============================================================================
// SECTION: Execution Metadata
// ============================================================================

/// Metadata describing what one evaluation call was performed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Profile whose thresholds were applied.
    pub profile: ResolvedProfile,
    /// Execution identifier supplied by the caller.
    pub execution_id: ExecutionId,
    /// Caller-attributed evaluation timestamp.
    pub evaluated_at: Timestamp,
    /// Optional label naming what initiated the evaluation.
    pub initiated_by: Option<String>,
    /// Total rules in the rule set.
    pub rules_total: usize,
    /// Rules actually evaluated.
    pub rules_evaluated: usize,
    /// Rules skipped for missing metrics.
    pub rules_skipped: usize,
}

// ============================================================================
// SECTION: Evaluation Result
// ============================================================================

/// Immutable result of one evaluation call.
///
/// # Invariants
/// - `violations` is sorted by `(rule id, metric name)` byte-wise.
/// - Created once per evaluation call; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Final verdict.
    pub outcome: Outcome,
    /// Violations in canonical order.
    pub violations: Vec<Violation>,
    /// Data-completeness report.
    pub completeness: CompletenessReport,
    /// Execution metadata.
    pub metadata: ExecutionMetadata,
    /// Fingerprint of the sample data the verdict was derived from.
    pub fingerprint: DataFingerprint,
    /// Per-rule evaluation records in sweep order.
    pub rule_records: Vec<RuleEvalRecord>,
}

impl EvaluationResult {
    /// Assembles the final result, deriving rule counts from the
    /// completeness report and enforcing canonical violation order.
    #[must_use]
    #[allow(clippy::too_many_arguments, reason = "Pure assembly step over the full evaluation state.")]
    pub fn assemble(
        outcome: Outcome,
        mut violations: Vec<Violation>,
        completeness: CompletenessReport,
        profile: ResolvedProfile,
        context: &ExecutionContext,
        fingerprint: DataFingerprint,
        rules_total: usize,
        rule_records: Vec<RuleEvalRecord>,
    ) -> Self {
        sort_canonical(&mut violations);
        let rules_skipped = completeness.unevaluated_rules.len();
        let metadata = ExecutionMetadata {
            profile,
            execution_id: context.execution_id.clone(),
            evaluated_at: context.evaluated_at,
            initiated_by: context.initiated_by.clone(),
            rules_total,
            rules_evaluated: rules_total.saturating_sub(rules_skipped),
            rules_skipped,
        };

        Self {
            outcome,
            violations,
            completeness,
            metadata,
            fingerprint,
            rule_records,
        }
    }
}
