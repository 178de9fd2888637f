use crate::technique::TechniqueEffect;
use crate::types::{ElementType, Range};
use serde::Deserialize;

/// TOML configuration for a technique file
#[derive(Debug, Deserialize)]
pub struct TechniqueFileConfig {
    #[serde(default)]
    pub techniques: Vec<TechniqueConfig>,
}

/// Configuration for a single technique
#[derive(Debug, Clone, Deserialize)]
pub struct TechniqueConfig {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub range: Range,
    #[serde(default = "default_power")]
    pub power: f64,
    #[serde(default)]
    pub types: Vec<ElementType>,
    /// Turns the technique is unusable after being used
    #[serde(default)]
    pub recharge: u32,
    #[serde(default)]
    pub effects: Vec<TechniqueEffect>,
}

fn default_power() -> f64 {
    1.0
}
