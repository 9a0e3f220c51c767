//! Narrowing of the catalog based on earlier answers
//!
//! Both entry points are pure. They build the option lists for the
//! capability and feature prompts, and they validate a finished plan.

use crate::catalog::{Archetype, Capability, Feature};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// A feature exclusion rule: when `applies` holds, every key in `removes` is dropped
pub struct ExclusionRule {
    pub name: &'static str,
    pub applies: fn(Archetype, &BTreeSet<Capability>) -> bool,
    pub removes: &'static [Feature],
}

/// Exclusion rules in evaluation order.
///
/// Rules only ever remove keys, so the resulting set does not depend on the order.
pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        name: "token auth needs an api or mobile client",
        applies: |base, caps| !caps.contains(&Capability::Mobile) && base != Archetype::Api,
        removes: &[Feature::AuthSanctum],
    },
    ExclusionRule {
        name: "websockets need real-time",
        applies: |_, caps| !caps.contains(&Capability::RealTime),
        removes: &[Feature::WebsocketsReverb],
    },
    ExclusionRule {
        name: "ai features need the ai capability",
        applies: |_, caps| !caps.contains(&Capability::Ai),
        removes: &[Feature::AiPrism, Feature::AiVector],
    },
    ExclusionRule {
        name: "payments need the saas capability",
        applies: |_, caps| !caps.contains(&Capability::Saas),
        removes: &[Feature::PaymentStripe, Feature::PaymentPaddle],
    },
    ExclusionRule {
        name: "microservices stay light",
        applies: |base, _| base == Archetype::Microservice,
        removes: &[
            Feature::FileIntervention,
            Feature::FileMediaLibrary,
            Feature::MonitoringTelescope,
        ],
    },
];

/// Capabilities that may be offered for a base type.
///
/// Archetypes without an entry get the whole catalog.
pub fn allowed_capabilities(base: Archetype) -> BTreeSet<Capability> {
    match base {
        Archetype::Api => BTreeSet::from([
            Capability::Mobile,
            Capability::RealTime,
            Capability::Ai,
            Capability::Graphql,
        ]),
        Archetype::Microservice => BTreeSet::from([Capability::RealTime]),
        Archetype::Mcp => BTreeSet::from([Capability::Ai]),
        _ => Capability::iter().collect(),
    }
}

/// Features that may be offered given the base type and chosen capabilities
pub fn filter_features(base: Archetype, capabilities: &BTreeSet<Capability>) -> BTreeSet<Feature> {
    let all: BTreeSet<Feature> = Feature::iter().collect();
    narrow_features(base, capabilities, &all)
}

/// Apply the exclusion rules to an arbitrary candidate set
pub fn narrow_features(
    base: Archetype,
    capabilities: &BTreeSet<Capability>,
    candidates: &BTreeSet<Feature>,
) -> BTreeSet<Feature> {
    let mut filtered = candidates.clone();
    for rule in EXCLUSION_RULES {
        if (rule.applies)(base, capabilities) {
            tracing::trace!(rule = rule.name, "exclusion rule applies");
            for feature in rule.removes {
                filtered.remove(feature);
            }
        }
    }
    filtered
}
