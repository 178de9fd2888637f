//! Condition definition loading

use super::ConfigError;
use crate::condition::{ConditionDef, ConditionRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for condition definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsConfig {
    #[serde(default)]
    pub conditions: Vec<ConditionDef>,
}

/// Load condition definitions from a TOML file
pub fn load_condition_configs(path: &Path) -> Result<ConditionRegistry, ConfigError> {
    let config: ConditionsConfig = super::load_toml(path)?;
    build_registry(config)
}

/// Parse condition definitions from a TOML string
pub fn parse_condition_configs(toml: &str) -> Result<ConditionRegistry, ConfigError> {
    let config: ConditionsConfig = super::parse_toml(toml)?;
    build_registry(config)
}

fn build_registry(config: ConditionsConfig) -> Result<ConditionRegistry, ConfigError> {
    let mut registry = ConditionRegistry::new();
    for def in config.conditions {
        for effect in &def.effects {
            effect.validate().map_err(|e| {
                ConfigError::ValidationError(format!("condition '{}': {}", def.slug, e))
            })?;
        }
        if registry.contains(&def.slug) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate condition slug '{}'",
                def.slug
            )));
        }
        registry.register(def);
    }

    // Replacement conditions spawned by charging must exist
    for def in registry.defs() {
        if !def.spawns_conditions() {
            continue;
        }
        for slug in def.repl_tech.iter().chain(def.repl_item.iter()) {
            if !registry.contains(slug) {
                return Err(ConfigError::ValidationError(format!(
                    "condition '{}' references unknown condition '{}'",
                    def.slug, slug
                )));
            }
        }
    }

    Ok(registry)
}
