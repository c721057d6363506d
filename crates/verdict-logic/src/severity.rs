// verdict-logic/src/severity.rs
// ============================================================================
// Module: Severity Lattice
// Description: Totally ordered severity values and violation classification.
// Purpose: Provide deterministic severity escalation for rule evaluation.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Defines the severity lattice (`Pass < Warn < Fail`) and the violation
//! classification that drives WARN/FAIL discrimination. Escalation combines
//! two severities by taking the maximum, which keeps composite evaluation
//! fail-closed when any child degrades.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Severity of a rule evaluation result
///
/// # Invariants
/// - Represents a closed, totally ordered set: `Pass < Warn < Fail`.
/// - Escalation is commutative, associative, and idempotent (a join).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The rule condition was satisfied
    Pass,
    /// The rule condition failed in a non-critical way
    Warn,
    /// The rule condition failed critically
    Fail,
}

impl Severity {
    /// Returns true if the value is `Pass`
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if the value is `Warn`
    #[must_use]
    pub const fn is_warn(self) -> bool {
        matches!(self, Self::Warn)
    }

    /// Returns true if the value is `Fail`
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Combines two severities by taking the maximum
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }
}

// ============================================================================
// SECTION: Violation Classification
// ============================================================================

/// Classification of a violation driving WARN/FAIL discrimination
///
/// # Invariants
/// - `NonCritical` maps to `Severity::Warn`; `Critical` maps to
///   `Severity::Fail`. The mapping is fixed and total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationClass {
    /// Violation that degrades the verdict to WARN
    NonCritical,
    /// Violation that degrades the verdict to FAIL
    Critical,
}

impl ViolationClass {
    /// Returns the severity implied by this classification
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::NonCritical => Severity::Warn,
            Self::Critical => Severity::Fail,
        }
    }

    /// Returns true if the classification is `Critical`
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Severity;
    use super::ViolationClass;

    #[test]
    fn severity_order_is_total() {
        assert!(Severity::Pass < Severity::Warn);
        assert!(Severity::Warn < Severity::Fail);
    }

    #[test]
    fn escalate_takes_maximum() {
        assert_eq!(Severity::Pass.escalate(Severity::Warn), Severity::Warn);
        assert_eq!(Severity::Warn.escalate(Severity::Fail), Severity::Fail);
        assert_eq!(Severity::Fail.escalate(Severity::Pass), Severity::Fail);
        assert_eq!(Severity::Warn.escalate(Severity::Warn), Severity::Warn);
    }

    #[test]
    fn classification_maps_to_severity() {
        assert_eq!(ViolationClass::NonCritical.severity(), Severity::Warn);
        assert_eq!(ViolationClass::Critical.severity(), Severity::Fail);
        assert!(ViolationClass::Critical.is_critical());
        assert!(!ViolationClass::NonCritical.is_critical());
    }
}
