// perfgate-core/src/core/profile.rs
// ============================================================================
// Module: PerfGate Profile and Execution Context
// Description: Resolved profile references and caller-supplied run context.
// Purpose: Carry the identity inputs an evaluation call is performed under.
// Dependencies: crate::core::{identifiers, time}, serde
// ============================================================================

//! ## Overview
//! Profile resolution happens outside the core: callers hand the engine an
//! already-resolved profile reference describing which threshold profile the
//! rule set was derived from. The execution context carries the explicit
//! identity and timestamp for one evaluation call; the core reads no
//! environment state of its own.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ExecutionId;
use crate::core::identifiers::ProfileId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Resolved Profile
// ============================================================================

/// Reference to an externally resolved threshold profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    /// Profile identifier.
    pub profile_id: ProfileId,
    /// Optional profile version string.
    pub version: Option<String>,
    /// Optional profile description.
    pub description: Option<String>,
}

impl ResolvedProfile {
    /// Creates a resolved profile reference with no version or description.
    #[must_use]
    pub fn new(profile_id: impl Into<ProfileId>) -> Self {
        Self {
            profile_id: profile_id.into(),
            version: None,
            description: None,
        }
    }
}

// ============================================================================
// SECTION: Execution Context
// ============================================================================

/// Caller-supplied context for one evaluation call.
///
/// # Invariants
/// - `evaluated_at` is provided by the caller; the core never reads
///   wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Execution identifier.
    pub execution_id: ExecutionId,
    /// Timestamp the caller attributes to this evaluation.
    pub evaluated_at: Timestamp,
    /// Optional label naming what initiated the evaluation.
    pub initiated_by: Option<String>,
}

impl ExecutionContext {
    /// Creates an execution context without an initiator label.
    #[must_use]
    pub fn new(execution_id: impl Into<ExecutionId>, evaluated_at: Timestamp) -> Self {
        Self {
            execution_id: execution_id.into(),
            evaluated_at,
            initiated_by: None,
        }
    }
}
