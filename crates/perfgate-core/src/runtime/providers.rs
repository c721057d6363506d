// perfgate-core/src/runtime/providers.rs
// ============================================================================
// Module: PerfGate In-Memory Providers
// Description: Simple in-memory collaborator implementations.
// Purpose: Provide deterministic provider implementations without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides simple in-memory implementations of the collaborator
//! traits for tests and local embedding. They hold fixed value data and are
//! not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::ProfileId;
use crate::core::ResolvedProfile;
use crate::core::RuleDefinition;
use crate::core::SampleSet;
use crate::interfaces::EvaluationRulesProvider;
use crate::interfaces::MetricsError;
use crate::interfaces::MetricsProvider;
use crate::interfaces::ProfileError;
use crate::interfaces::ProfileResolver;
use crate::interfaces::RulesError;

// ============================================================================
// SECTION: In-Memory Metrics Provider
// ============================================================================

/// In-memory metrics provider serving a fixed sample set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetricsProvider {
    /// Samples returned to every caller.
    samples: SampleSet,
}

impl InMemoryMetricsProvider {
    /// Creates a provider serving the given sample set.
    #[must_use]
    pub const fn new(samples: SampleSet) -> Self {
        Self {
            samples,
        }
    }
}

impl MetricsProvider for InMemoryMetricsProvider {
    fn available_samples(&self) -> Result<SampleSet, MetricsError> {
        Ok(self.samples.clone())
    }
}

// ============================================================================
// SECTION: In-Memory Profile Resolver
// ============================================================================

/// In-memory profile resolver backed by a sorted map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileResolver {
    /// Profiles keyed by identifier string.
    profiles: BTreeMap<String, ResolvedProfile>,
}

impl InMemoryProfileResolver {
    /// Creates a resolver holding the given profiles.
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = ResolvedProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.profile_id.to_string(), profile))
                .collect(),
        }
    }
}

impl ProfileResolver for InMemoryProfileResolver {
    fn profile_exists(&self, profile_id: &ProfileId) -> bool {
        self.profiles.contains_key(profile_id.as_str())
    }

    fn resolve_profile(&self, profile_id: &ProfileId) -> Result<ResolvedProfile, ProfileError> {
        self.profiles.get(profile_id.as_str()).cloned().ok_or_else(|| {
            ProfileError::Resolution {
                profile_id: profile_id.to_string(),
                message: "profile is not registered".to_string(),
            }
        })
    }

    fn available_profile_ids(&self) -> Vec<ProfileId> {
        self.profiles.keys().map(|key| ProfileId::new(key.clone())).collect()
    }
}

// ============================================================================
// SECTION: In-Memory Rules Provider
// ============================================================================

/// In-memory rules provider serving a fixed rule set.
///
/// Custom rules are not supported; the default `evaluate_rule` rejection
/// applies, which the coordinator converts into a critical violation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRulesProvider {
    /// Rule definitions returned to every caller.
    rules: Vec<RuleDefinition>,
}

impl InMemoryRulesProvider {
    /// Creates a provider serving the given rule set.
    #[must_use]
    pub const fn new(rules: Vec<RuleDefinition>) -> Self {
        Self {
            rules,
        }
    }
}

impl EvaluationRulesProvider for InMemoryRulesProvider {
    fn rules(&self) -> Result<Vec<RuleDefinition>, RulesError> {
        Ok(self.rules.clone())
    }
}
