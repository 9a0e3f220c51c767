//! The resolved set of choices for one wizard run
//!
//! Answers are collected into a [`PlanDraft`] which is moved from step to
//! step. [`PlanDraft::finalize`] is the only way to obtain a
//! [`ConfigurationPlan`], and it checks the selections against the filter,
//! so every plan handed to a configurator is consistent.

use crate::catalog::{Archetype, Cache, Capability, Database, Feature, Queue, Storage};
use crate::filter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Infrastructure choices; every key is required
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Infrastructure {
    pub database: Database,
    pub cache: Cache,
    pub queue: Queue,
    pub storage: Storage,
}

/// Selections that contradict the filter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("capability '{capability}' is not available for base type '{base_type}'")]
    CapabilityNotAllowed {
        base_type: Archetype,
        capability: Capability,
    },

    #[error("feature '{feature}' is not available for base type '{base_type}' with the selected capabilities")]
    FeatureNotOffered { base_type: Archetype, feature: Feature },
}

/// A plan under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    base_type: Archetype,
    capabilities: BTreeSet<Capability>,
    features: BTreeSet<Feature>,
}

impl PlanDraft {
    pub fn new(base_type: Archetype) -> Self {
        Self {
            base_type,
            capabilities: BTreeSet::new(),
            features: BTreeSet::new(),
        }
    }

    pub fn base_type(&self) -> Archetype {
        self.base_type
    }

    /// Capabilities to offer at the next prompt
    pub fn offered_capabilities(&self) -> BTreeSet<Capability> {
        filter::allowed_capabilities(self.base_type)
    }

    /// Features to offer given the capabilities chosen so far
    pub fn offered_features(&self) -> BTreeSet<Feature> {
        filter::filter_features(self.base_type, &self.capabilities)
    }

    /// Replace the chosen capabilities. Features chosen earlier are narrowed to
    /// what the new capabilities still allow.
    pub fn with_capabilities(self, capabilities: BTreeSet<Capability>) -> Self {
        let features = filter::narrow_features(self.base_type, &capabilities, &self.features);
        Self {
            capabilities,
            features,
            ..self
        }
    }

    pub fn with_features(self, features: BTreeSet<Feature>) -> Self {
        Self { features, ..self }
    }

    /// Validate the draft and freeze it into a plan
    pub fn finalize(self, infrastructure: Infrastructure) -> Result<ConfigurationPlan, PlanError> {
        let allowed = filter::allowed_capabilities(self.base_type);
        if let Some(capability) = self.capabilities.iter().find(|c| !allowed.contains(c)) {
            return Err(PlanError::CapabilityNotAllowed {
                base_type: self.base_type,
                capability: *capability,
            });
        }

        let offered = filter::filter_features(self.base_type, &self.capabilities);
        if let Some(feature) = self.features.iter().find(|f| !offered.contains(f)) {
            return Err(PlanError::FeatureNotOffered {
                base_type: self.base_type,
                feature: *feature,
            });
        }

        Ok(ConfigurationPlan {
            base_type: self.base_type,
            capabilities: self.capabilities,
            features: self.features,
            infrastructure,
        })
    }
}

/// All choices for one run, validated and immutable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationPlan {
    base_type: Archetype,
    capabilities: BTreeSet<Capability>,
    features: BTreeSet<Feature>,
    infrastructure: Infrastructure,
}

impl ConfigurationPlan {
    pub fn base_type(&self) -> Archetype {
        self.base_type
    }

    pub fn capabilities(&self) -> &BTreeSet<Capability> {
        &self.capabilities
    }

    pub fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    pub fn infrastructure(&self) -> &Infrastructure {
        &self.infrastructure
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Lines shown in the confirmation summary
    pub fn summary_lines(&self) -> Vec<String> {
        let capabilities = self
            .capabilities
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            format!("Base Type: {}", self.base_type),
            format!("Capabilities: {}", capabilities),
            format!("Features: {} selected", self.features.len()),
            format!("Database: {}", self.infrastructure.database),
            format!("Cache: {}", self.infrastructure.cache),
            format!("Queue: {}", self.infrastructure.queue),
            format!("Storage: {}", self.infrastructure.storage),
        ]
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration plan")
    }
}

/// Pre-recorded answers for non-interactive runs
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub base_type: Archetype,
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    #[serde(default)]
    pub features: BTreeSet<Feature>,
    pub infrastructure: Infrastructure,
}

impl Answers {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse answers file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Run the answers through the same draft steps as the interactive flow
    pub fn into_plan(self) -> Result<ConfigurationPlan, PlanError> {
        let mut draft = PlanDraft::new(self.base_type);
        draft.capabilities = self.capabilities;
        draft.features = self.features;
        draft.finalize(self.infrastructure)
    }
}
