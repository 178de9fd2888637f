//! Damage formula constants

use content_core::ElementType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global formula constants instance
static FORMULA_CONSTANTS: OnceLock<FormulaConstants> = OnceLock::new();

/// Initialize the global formula constants from a TOML file
///
/// Must be called once at startup before any damage calculations.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = FormulaConstants::load_from_path(path)?;
    FORMULA_CONSTANTS
        .set(constants)
        .map_err(|_| already_initialized())
}

/// Initialize the global formula constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    FORMULA_CONSTANTS
        .set(FormulaConstants::default())
        .map_err(|_| already_initialized())
}

fn already_initialized() -> ConfigError {
    ConfigError::ValidationError("FormulaConstants already initialized".to_string())
}

/// Get a reference to the global formula constants
///
/// Panics if constants have not been initialized via `init_constants()` or
/// `init_constants_default()`.
pub fn constants() -> &'static FormulaConstants {
    FORMULA_CONSTANTS
        .get()
        .expect("FormulaConstants not initialized - call init_constants() first")
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
pub fn ensure_constants_initialized() {
    FORMULA_CONSTANTS.get_or_init(FormulaConstants::default);
}

/// Tunable constants of the damage formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// Added to the attacker level when scaling strength
    #[serde(default = "default_level_offset")]
    pub level_offset: u32,
    /// Floor applied to the defender's resistance stat
    #[serde(default = "default_min_resist")]
    pub min_resist: u32,
    /// Element effectiveness table; missing pairs are neutral
    #[serde(default = "default_matchups")]
    pub matchups: Vec<ElementMatchup>,
}

/// Effectiveness of one attacking element against one defending element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementMatchup {
    pub attacker: ElementType,
    pub defender: ElementType,
    pub multiplier: f64,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            level_offset: default_level_offset(),
            min_resist: default_min_resist(),
            matchups: default_matchups(),
        }
    }
}

impl FormulaConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: FormulaConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_resist == 0 {
            return Err(ConfigError::ValidationError(
                "min_resist must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self.matchups.iter().find(|m| m.multiplier < 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "negative multiplier for {} against {}",
                bad.attacker, bad.defender
            )));
        }
        Ok(())
    }

    /// Multiplier of one attacking element against one defending element
    pub fn element_multiplier(&self, attacker: ElementType, defender: ElementType) -> f64 {
        self.matchups
            .iter()
            .find(|m| m.attacker == attacker && m.defender == defender)
            .map(|m| m.multiplier)
            .unwrap_or(1.0)
    }
}

fn default_level_offset() -> u32 {
    7
}

fn default_min_resist() -> u32 {
    1
}

// Overcoming cycle: each element is strong against the next and weak in reverse
fn default_matchups() -> Vec<ElementMatchup> {
    use ElementType::*;
    let cycle = [(Fire, Metal), (Metal, Wood), (Wood, Earth), (Earth, Water), (Water, Fire)];
    cycle
        .iter()
        .flat_map(|&(strong, weak)| {
            [
                ElementMatchup {
                    attacker: strong,
                    defender: weak,
                    multiplier: 2.0,
                },
                ElementMatchup {
                    attacker: weak,
                    defender: strong,
                    multiplier: 0.5,
                },
            ]
        })
        .collect()
}
