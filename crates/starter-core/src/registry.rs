//! Archetype name to configurator resolution

use crate::catalog::Archetype;
use crate::configurators::{
    AiPowered, Api, Configurator, Hybrid, Mcp, Microservice, MobileBackend, Saas, Web,
};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No configurator found for '{requested}'. Available: {}", known.join(", "))]
    ConfiguratorNotFound {
        requested: String,
        known: Vec<&'static str>,
    },
}

/// The configurator for an archetype
pub fn for_archetype(archetype: Archetype) -> Box<dyn Configurator> {
    match archetype {
        Archetype::Api => Box::new(Api),
        Archetype::Web => Box::new(Web),
        Archetype::Hybrid => Box::new(Hybrid),
        Archetype::MobileBackend => Box::new(MobileBackend),
        Archetype::Microservice => Box::new(Microservice),
        Archetype::Saas => Box::new(Saas),
        Archetype::AiPowered => Box::new(AiPowered),
        Archetype::Mcp => Box::new(Mcp),
    }
}

/// Resolve an archetype by key, falling back to its conventional spelling
/// (`MobileBackend`, `mobile_backend` and `Mobile Backend` all name
/// `mobile-backend`).
pub fn resolve(name: &str) -> Result<Box<dyn Configurator>, RegistryError> {
    if let Ok(archetype) = Archetype::from_str(name) {
        return Ok(for_archetype(archetype));
    }

    let fallback = conventional_name(name);
    debug!(requested = name, %fallback, "trying conventional archetype name");
    Archetype::from_str(&fallback)
        .map(for_archetype)
        .map_err(|_| RegistryError::ConfiguratorNotFound {
            requested: name.to_string(),
            known: Archetype::keys(),
        })
}

/// Kebab-case form of a free-form archetype name
fn conventional_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.trim().chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    out.trim_end_matches('-').to_string()
}
