// perfgate-core/src/core/mod.rs
// ============================================================================
// Module: PerfGate Core Types
// Description: Canonical data model for rules, samples, and results.
// Purpose: Provide stable, serializable types for evaluation inputs and outputs.
// Dependencies: serde, verdict-logic
// ============================================================================

//! ## Overview
//! PerfGate core types define the rule vocabulary, metric samples, profiles,
//! completeness reports, and the immutable evaluation result. These types are
//! the canonical source of truth for any derived caller surfaces (CLI,
//! baseline, or export subsystems).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod fingerprint;
pub mod identifiers;
pub mod metrics;
pub mod profile;
pub mod report;
pub mod rules;
pub mod time;
pub mod violation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fingerprint::DEFAULT_FINGERPRINT_ALGORITHM;
pub use fingerprint::DataFingerprint;
pub use fingerprint::FingerprintAlgorithm;
pub use fingerprint::FingerprintError;
pub use fingerprint::fingerprint_samples;
pub use identifiers::ExecutionId;
pub use identifiers::MetricName;
pub use identifiers::ProfileId;
pub use identifiers::RuleId;
pub use metrics::AggregatedMetricValue;
pub use metrics::MetricSample;
pub use metrics::SampleSet;
pub use profile::ExecutionContext;
pub use profile::ResolvedProfile;
pub use report::CompletenessReport;
pub use report::EvaluationResult;
pub use report::ExecutionMetadata;
pub use report::RuleEvalRecord;
pub use report::RuleEvalStatus;
pub use rules::ComparisonOp;
pub use rules::EQUALITY_EPSILON;
pub use rules::RuleDefinition;
pub use rules::RuleError;
pub use rules::RuleEvaluation;
pub use rules::RuleKind;
pub use rules::THROUGHPUT_AGGREGATION;
pub use rules::ensure_unique_rule_ids;
pub use time::Timestamp;
pub use violation::Violation;
pub use violation::sort_canonical;
