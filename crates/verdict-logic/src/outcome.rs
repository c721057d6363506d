// verdict-logic/src/outcome.rs
// ============================================================================
// Module: Evaluation Outcome
// Description: Final verdict vocabulary for evaluation runs.
// Purpose: Provide the closed outcome set consumed by automation callers.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Defines the four-valued verdict produced by outcome aggregation. The set
//! is closed so downstream callers (exit-code mapping, reporting) can match
//! exhaustively. `Inconclusive` exists to keep insufficient data from being
//! mistaken for a clean pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::severity::Severity;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Final verdict for one evaluation run
///
/// # Invariants
/// - Represents a closed set: pass, warn, fail, or inconclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every evaluated rule passed with sufficient data
    Pass,
    /// Only non-critical violations were found
    Warn,
    /// At least one critical violation was found
    Fail,
    /// Too little data was available to reach a verdict
    Inconclusive,
}

impl Outcome {
    /// Returns true if the value is `Pass`
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if the value is `Fail`
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Returns true if the value is `Inconclusive`
    #[must_use]
    pub const fn is_inconclusive(self) -> bool {
        matches!(self, Self::Inconclusive)
    }
}

impl From<Severity> for Outcome {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Pass => Self::Pass,
            Severity::Warn => Self::Warn,
            Severity::Fail => Self::Fail,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Outcome;
    use super::Severity;

    #[test]
    fn severity_converts_to_outcome() {
        assert_eq!(Outcome::from(Severity::Pass), Outcome::Pass);
        assert_eq!(Outcome::from(Severity::Warn), Outcome::Warn);
        assert_eq!(Outcome::from(Severity::Fail), Outcome::Fail);
    }

    #[test]
    fn predicates_match_variants() {
        assert!(Outcome::Pass.is_pass());
        assert!(Outcome::Fail.is_fail());
        assert!(Outcome::Inconclusive.is_inconclusive());
        assert!(!Outcome::Warn.is_pass());
    }
}
