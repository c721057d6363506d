// perfgate-core/src/runtime/aggregator.rs
// ============================================================================
// Module: PerfGate Outcome Aggregation
// Description: Fixed-precedence folding of violations and completeness.
// Purpose: Collapse partial evaluation signals into one final verdict.
// Dependencies: crate::core, verdict-logic
// ============================================================================

//! ## Overview
//! Outcome aggregation applies a fixed precedence, first match wins:
//! insufficient data yields `Inconclusive` before any violation is
//! considered, one critical violation yields `Fail` over any number of
//! warnings, non-critical violations yield `Warn`, and only a fully covered,
//! violation-free evaluation yields `Pass`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use verdict_logic::Outcome;

use crate::core::CompletenessReport;
use crate::core::Violation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Completeness ratio below which the verdict is `Inconclusive`.
pub const INCONCLUSIVE_COMPLETENESS_THRESHOLD: f64 = 0.5;

// ============================================================================
// SECTION: Outcome Aggregation
// ============================================================================

/// Folds violations and the completeness report into one outcome.
#[must_use]
pub fn aggregate_outcome(violations: &[Violation], completeness: &CompletenessReport) -> Outcome {
    if completeness.ratio < INCONCLUSIVE_COMPLETENESS_THRESHOLD {
        return Outcome::Inconclusive;
    }

    if violations.iter().any(|violation| violation.class.is_critical()) {
        return Outcome::Fail;
    }

    if !violations.is_empty() {
        return Outcome::Warn;
    }

    Outcome::Pass
}
