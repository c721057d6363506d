// perfgate-core/src/core/time.rs
// ============================================================================
// Module: PerfGate Time Model
// Description: Canonical timestamp representation for evaluation metadata.
// Purpose: Keep evaluation results replayable by making time an explicit input.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! PerfGate embeds explicit time values in execution metadata to keep replay
//! deterministic. The core engine never reads wall-clock time; callers must
//! supply timestamps through the execution context.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Canonical timestamp carried in evaluation metadata.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self::from_unix_millis(millis)
    }
}
