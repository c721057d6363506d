// verdict-logic/src/combine.rs
// ============================================================================
// Module: Combination Semantics
// Description: All/Any composition over child evaluation results.
// Purpose: Provide deterministic logical combination with severity escalation.
// Dependencies: serde::{Deserialize, Serialize}, crate::severity
// ============================================================================

//! ## Overview
//! Defines the logical operators used by composite rules. `All` passes only
//! if every child passes; `Any` passes if at least one child passes. When a
//! combination fails, its severity is the maximum severity observed among
//! the children, so a single critical child dominates any number of warnings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::severity::Severity;

// ============================================================================
// SECTION: Combination Operator
// ============================================================================

/// Logical operator for combining child evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineOp {
    /// Passes only if every child passes
    All,
    /// Passes if at least one child passes
    Any,
}

/// Combined result of child evaluations
///
/// # Invariants
/// - `severity` is `Severity::Pass` whenever `passed` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combined {
    /// Whether the combination passed
    pub passed: bool,
    /// Escalated severity of the combination
    pub severity: Severity,
}

impl CombineOp {
    /// Combines child results `(passed, severity)` under this operator.
    ///
    /// An empty child set passes: `All` is vacuously satisfied and `Any`
    /// over zero children carries no failing evidence.
    #[must_use]
    pub fn combine<I>(self, children: I) -> Combined
    where
        I: IntoIterator<Item = (bool, Severity)>,
    {
        let mut any_passed = false;
        let mut all_passed = true;
        let mut escalated = Severity::Pass;
        let mut seen = false;

        for (passed, severity) in children {
            seen = true;
            any_passed = any_passed || passed;
            all_passed = all_passed && passed;
            escalated = escalated.escalate(severity);
        }

        let passed = match self {
            Self::All => all_passed,
            Self::Any => any_passed || !seen,
        };

        Combined {
            passed,
            severity: if passed { Severity::Pass } else { escalated },
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::CombineOp;
    use super::Severity;

    #[test]
    fn all_requires_every_child() {
        let combined = CombineOp::All
            .combine([(true, Severity::Pass), (false, Severity::Fail)]);
        assert!(!combined.passed);
        assert_eq!(combined.severity, Severity::Fail);

        let combined = CombineOp::All.combine([(true, Severity::Pass), (true, Severity::Pass)]);
        assert!(combined.passed);
        assert_eq!(combined.severity, Severity::Pass);
    }

    #[test]
    fn any_requires_one_child() {
        let combined = CombineOp::Any
            .combine([(false, Severity::Warn), (true, Severity::Pass)]);
        assert!(combined.passed);
        assert_eq!(combined.severity, Severity::Pass);

        let combined = CombineOp::Any
            .combine([(false, Severity::Warn), (false, Severity::Fail)]);
        assert!(!combined.passed);
        assert_eq!(combined.severity, Severity::Fail);
    }

    #[test]
    fn failed_combination_escalates_to_maximum() {
        let combined = CombineOp::All
            .combine([(false, Severity::Warn), (false, Severity::Warn)]);
        assert!(!combined.passed);
        assert_eq!(combined.severity, Severity::Warn);
    }

    #[test]
    fn empty_combination_passes() {
        assert!(CombineOp::All.combine([]).passed);
        assert!(CombineOp::Any.combine([]).passed);
    }
}
