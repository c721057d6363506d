// perfgate-core/src/runtime/engine.rs
// ============================================================================
// Module: PerfGate Verdict Engine
// Description: Deterministic evaluation orchestration over collaborator traits.
// Purpose: Execute one evaluation call from validation through result assembly.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The verdict engine is the single canonical execution path for PerfGate.
//! One call walks a linear, terminal-only flow: validate inputs, resolve the
//! profile, fetch rules and samples, assess completeness, sweep the rules,
//! aggregate the outcome, fingerprint the data, and assemble the result.
//! Invalid inputs fail fast before any data-dependent work; from
//! completeness assessment onward every data problem is representable as
//! data, so a call either returns an invalid-input error or a fully
//! populated result, never anything in between.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::DEFAULT_FINGERPRINT_ALGORITHM;
use crate::core::EvaluationResult;
use crate::core::ExecutionContext;
use crate::core::FingerprintAlgorithm;
use crate::core::FingerprintError;
use crate::core::ProfileId;
use crate::core::RuleError;
use crate::core::ensure_unique_rule_ids;
use crate::core::fingerprint_samples;
use crate::interfaces::EvaluationRulesProvider;
use crate::interfaces::MetricsError;
use crate::interfaces::MetricsProvider;
use crate::interfaces::ProfileError;
use crate::interfaces::ProfileResolver;
use crate::interfaces::RulesError;
use crate::runtime::aggregator::aggregate_outcome;
use crate::runtime::completeness::assess_completeness;
use crate::runtime::coordinator::evaluate_rules;

// ============================================================================
// SECTION: Engine Configuration
// ============================================================================

/// Configuration for the PerfGate verdict engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fingerprint algorithm used for sample digests.
    pub fingerprint_algorithm: FingerprintAlgorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fingerprint_algorithm: DEFAULT_FINGERPRINT_ALGORITHM,
        }
    }
}

// ============================================================================
// SECTION: Verdict Engine
// ============================================================================

/// Verdict engine implementing deterministic PerfGate evaluation.
pub struct VerdictEngine<M, P, R> {
    /// Metrics provider implementation.
    metrics: M,
    /// Profile resolver implementation.
    profiles: P,
    /// Rules provider implementation.
    rules: R,
    /// Engine configuration.
    config: EngineConfig,
}

impl<M, P, R> VerdictEngine<M, P, R>
where
    M: MetricsProvider,
    P: ProfileResolver,
    R: EvaluationRulesProvider,
{
    /// Creates a new verdict engine.
    #[must_use]
    pub const fn new(metrics: M, profiles: P, rules: R, config: EngineConfig) -> Self {
        Self {
            metrics,
            profiles,
            rules,
            config,
        }
    }

    /// Evaluates the rule set for a profile against the available samples.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] for invalid inputs (blank or unknown profile
    /// identifier, resolver failure, empty or invalid rule set) and for
    /// collaborator failures raised before completeness assessment. Missing
    /// metrics and faulting rules never error; they degrade the returned
    /// result instead.
    pub fn evaluate(
        &self,
        profile_id: &ProfileId,
        context: &ExecutionContext,
    ) -> Result<EvaluationResult, EngineError> {
        if profile_id.is_blank() {
            return Err(EngineError::BlankProfileId);
        }

        if !self.profiles.profile_exists(profile_id) {
            let mut available: Vec<String> = self
                .profiles
                .available_profile_ids()
                .iter()
                .map(ToString::to_string)
                .collect();
            available.sort();
            return Err(EngineError::UnknownProfile {
                profile_id: profile_id.to_string(),
                available,
            });
        }

        let profile = self.profiles.resolve_profile(profile_id)?;

        let rules = self.rules.rules()?;
        if rules.is_empty() {
            return Err(EngineError::EmptyRuleSet);
        }
        for rule in &rules {
            rule.validate()?;
        }
        ensure_unique_rule_ids(&rules)?;

        let samples = self.metrics.available_samples()?;
        let available_names = samples.metric_names();

        let completeness = assess_completeness(&rules, &available_names);
        let sweep = evaluate_rules(&rules, &samples, &self.rules);
        let outcome = aggregate_outcome(&sweep.violations, &completeness);
        let fingerprint = fingerprint_samples(self.config.fingerprint_algorithm, &samples)?;

        Ok(EvaluationResult::assemble(
            outcome,
            sweep.violations,
            completeness,
            profile,
            context,
            fingerprint,
            rules.len(),
            sweep.records,
        ))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Verdict engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Profile identifier is empty or whitespace-only.
    #[error("profile identifier must not be blank")]
    BlankProfileId,
    /// Profile identifier is not known to the resolver.
    #[error("unknown profile {profile_id}; known profiles: {}", .available.join(", "))]
    UnknownProfile {
        /// Offending profile identifier.
        profile_id: String,
        /// Known profile identifiers, sorted.
        available: Vec<String>,
    },
    /// Profile resolution failed.
    #[error("profile resolution failed: {0}")]
    ProfileResolution(#[from] ProfileError),
    /// Rule set is empty.
    #[error("rule set must not be empty")]
    EmptyRuleSet,
    /// Rule definition failed validation.
    #[error("invalid rule definition: {0}")]
    InvalidRule(#[from] RuleError),
    /// Metrics provider failed before evaluation began.
    #[error("metrics provider failed: {0}")]
    Metrics(#[from] MetricsError),
    /// Rules provider failed to supply the rule set.
    #[error("rules provider failed: {0}")]
    Rules(#[from] RulesError),
    /// Fingerprint computation failed.
    #[error("fingerprint computation failed: {0}")]
    Fingerprint(#[from] FingerprintError),
}
