// verdict-logic/src/lib.rs
// ============================================================================
// Module: Verdict Logic Root
// Description: Public API surface for the verdict vocabulary.
// Purpose: Wire together severity, outcome, and combination modules.
// Dependencies: crate::{combine, outcome, severity}
// ============================================================================

//! ## Overview
//! This crate defines the verdict vocabulary shared by evaluation engines:
//! the severity lattice, the violation classification, the four-valued
//! outcome, and the All/Any combination semantics. It is domain-agnostic and
//! carries no evaluation logic of its own.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod combine;
pub mod outcome;
pub mod severity;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use combine::Combined;
pub use combine::CombineOp;
pub use outcome::Outcome;
pub use severity::Severity;
pub use severity::ViolationClass;
