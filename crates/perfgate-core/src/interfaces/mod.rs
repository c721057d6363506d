// perfgate-core/src/interfaces/mod.rs
// ============================================================================
// Module: PerfGate Interfaces
// Description: Backend-agnostic interfaces for metrics, profiles, and rules.
// Purpose: Define the collaborator surfaces consumed by the PerfGate runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how PerfGate integrates with collection engines,
//! configuration resolvers, and rule catalogs without embedding
//! backend-specific details. Implementations must be deterministic for the
//! duration of one evaluation call: the engine treats everything they return
//! as read-only value data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::MetricName;
use crate::core::ProfileId;
use crate::core::ResolvedProfile;
use crate::core::RuleDefinition;
use crate::core::RuleEvaluation;
use crate::core::SampleSet;

// ============================================================================
// SECTION: Metrics Provider
// ============================================================================

/// Metrics provider errors.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metrics provider reported an error.
    #[error("metrics provider error: {0}")]
    Provider(String),
}

/// Backend-agnostic source of collected metric samples.
pub trait MetricsProvider {
    /// Returns the samples available for evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] when samples cannot be fetched.
    fn available_samples(&self) -> Result<SampleSet, MetricsError>;

    /// Returns true when a sample exists for the metric.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] when availability cannot be determined.
    fn is_metric_available(&self, metric: &MetricName) -> Result<bool, MetricsError> {
        Ok(self.available_samples()?.contains(metric))
    }

    /// Returns the deduplicated available metric names, sorted byte-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] when names cannot be listed.
    fn available_metric_names(&self) -> Result<Vec<MetricName>, MetricsError> {
        Ok(self.available_samples()?.metric_names())
    }
}

// ============================================================================
// SECTION: Profile Resolver
// ============================================================================

/// Profile resolution errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Resolver reported an error for a profile.
    #[error("failed to resolve profile {profile_id}: {message}")]
    Resolution {
        /// Profile identifier that failed to resolve.
        profile_id: String,
        /// Resolver-reported failure description.
        message: String,
    },
}

/// Resolver of hierarchical configuration profiles into concrete references.
pub trait ProfileResolver {
    /// Returns true when the profile identifier is known.
    fn profile_exists(&self, profile_id: &ProfileId) -> bool;

    /// Resolves a profile identifier into a concrete profile reference.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] with a descriptive message when resolution
    /// fails.
    fn resolve_profile(&self, profile_id: &ProfileId) -> Result<ResolvedProfile, ProfileError>;

    /// Returns the known profile identifiers, sorted byte-wise.
    fn available_profile_ids(&self) -> Vec<ProfileId>;
}

// ============================================================================
// SECTION: Evaluation Rules Provider
// ============================================================================

/// Rules provider errors.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rules provider reported an error.
    #[error("rules provider error: {0}")]
    Provider(String),
    /// Provider does not support evaluating the given rule.
    #[error("no evaluator registered for rule {0}")]
    UnsupportedRule(String),
}

/// Source of rule definitions and custom-rule evaluation.
pub trait EvaluationRulesProvider {
    /// Returns the rule definitions to evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] when the rule set cannot be fetched.
    fn rules(&self) -> Result<Vec<RuleDefinition>, RulesError>;

    /// Evaluates a custom rule against the sample set.
    ///
    /// This is the registered extension point for rule variants the core
    /// does not evaluate itself. The default implementation rejects every
    /// rule; the coordinator converts the rejection into one critical
    /// violation rather than aborting the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] when the rule is unsupported or evaluation
    /// fails.
    fn evaluate_rule(
        &self,
        rule: &RuleDefinition,
        samples: &SampleSet,
    ) -> Result<RuleEvaluation, RulesError> {
        let _ = samples;
        Err(RulesError::UnsupportedRule(rule.rule_id.to_string()))
    }
}
